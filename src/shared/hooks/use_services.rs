use dioxus::prelude::*;

use crate::app::context::AppServices;

/// Services provided by `App`
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}
