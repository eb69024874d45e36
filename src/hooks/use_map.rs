// ============================================================================
// USE MAP HOOK - lifecycle of a mounted map widget
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::map::{MapError, MapHandle};
use crate::models::Coordinates;

/// Hook-local state (not a global store).
#[derive(Clone, PartialEq)]
pub struct MapState {
    pub mounted: bool,
}

/// Handle returned by [`use_map`].
#[derive(Clone)]
pub struct UseMapHandle {
    pub state: UseStateHandle<MapState>,
}

impl UseMapHandle {
    /// Whether the widget instance currently exists.
    pub fn mounted(&self) -> bool {
        self.state.mounted
    }
}

/// Drive the lifecycle of a map widget inside `container`.
///
/// The widget is instantiated exactly once per component lifetime, follows
/// `center` changes by re-centering the existing instance (never by
/// re-mounting), and is removed again when the component unmounts.
#[hook]
pub fn use_map(container: NodeRef, center: Coordinates) -> UseMapHandle {
    let state = use_state(|| MapState { mounted: false });
    let handle: Rc<RefCell<Option<MapHandle>>> = use_mut_ref(|| None);

    // Mount once, after the first render has put the container in the DOM.
    // The empty dependency set keeps this effect from re-running on prop
    // changes; the returned closure runs on unmount and releases the
    // widget instance.
    {
        let state = state.clone();
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let mounted = container
                .cast::<HtmlElement>()
                .ok_or(MapError::ContainerMissing)
                .and_then(|element| MapHandle::mount(&element, center));
            match mounted {
                Ok(instance) => {
                    *handle.borrow_mut() = Some(instance);
                    state.set(MapState { mounted: true });
                }
                Err(e) => log::error!("❌ Map mount failed: {}", e),
            }

            move || {
                if handle.borrow_mut().take().is_some() {
                    log::info!("👋 Map unmounted");
                }
            }
        });
    }

    // Follow coordinate changes on the already-mounted instance. The first
    // run (same render as the mount) is skipped so the effect only fires
    // when the center actually changes.
    {
        let handle = handle.clone();
        let first_run = use_mut_ref(|| true);
        use_effect_with(center, move |center| {
            if *first_run.borrow() {
                *first_run.borrow_mut() = false;
            } else if let Some(map) = handle.borrow().as_ref() {
                map.set_center(*center);
            }
            || ()
        });
    }

    UseMapHandle { state }
}
