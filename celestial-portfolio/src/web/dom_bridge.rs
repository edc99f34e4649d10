use crate::engine::camera::scroll_camera::{ScrollEvent, ScrollOffset};
use crate::interaction::pointer::PointerEvent;
use bevy::prelude::*;
use std::sync::{Arc, Mutex};

#[cfg(target_arch = "wasm32")]
use crate::interaction::pointer::PointerKind;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Input captured by a DOM listener, waiting for the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomInput {
    Scroll { top: f32 },
    Pointer(PointerEvent),
}

/// Queue shared between DOM callbacks and the engine.
#[derive(Resource, Clone, Default)]
pub struct DomEventQueue(Arc<Mutex<Vec<DomInput>>>);

impl DomEventQueue {
    pub fn push(&self, input: DomInput) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(input);
        }
    }

    fn take(&self) -> Vec<DomInput> {
        match self.0.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }
}

pub struct DomBridgePlugin;

impl Plugin for DomBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, drain_dom_events);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(PreStartup, setup_dom_listeners);
    }
}

// Forward queued DOM input as engine events, in arrival order.
// Runs in PreUpdate so Update systems see the events the same frame. The
// offset is tracked even while loading, so the startup pose is current.
pub fn drain_dom_events(
    queue: Option<Res<DomEventQueue>>,
    mut offset: ResMut<ScrollOffset>,
    mut scroll_events: EventWriter<ScrollEvent>,
    mut pointer_events: EventWriter<PointerEvent>,
) {
    let Some(queue) = queue else {
        return;
    };

    for input in queue.take() {
        match input {
            DomInput::Scroll { top } => {
                offset.top = top;
                scroll_events.write(ScrollEvent { top });
            }
            DomInput::Pointer(event) => {
                pointer_events.write(event);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn document_top() -> Option<f32> {
    let body = web_sys::window()?.document()?.body()?;
    Some(body.get_bounding_client_rect().top() as f32)
}

#[cfg(target_arch = "wasm32")]
fn viewport_size(window: &web_sys::Window) -> Option<Vec2> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(width as f32, height as f32))
}

#[cfg(target_arch = "wasm32")]
fn pointer_listener(
    queue: DomEventQueue,
    kind: PointerKind,
) -> Closure<dyn FnMut(web_sys::MouseEvent)> {
    Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(viewport) = viewport_size(&window) else {
            return;
        };
        queue.push(DomInput::Pointer(PointerEvent {
            kind,
            position: Vec2::new(event.client_x() as f32, event.client_y() as f32),
            viewport,
        }));
    }) as Box<dyn FnMut(web_sys::MouseEvent)>)
}

#[cfg(target_arch = "wasm32")]
fn setup_dom_listeners(mut commands: Commands) {
    let queue = DomEventQueue::default();

    let Some(window) = web_sys::window() else {
        error!("Window object not available, scroll and pointer input disabled");
        return;
    };

    let scroll_queue = queue.clone();
    let on_scroll = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(top) = document_top() {
            scroll_queue.push(DomInput::Scroll { top });
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let on_move = pointer_listener(queue.clone(), PointerKind::Move);
    let on_click = pointer_listener(queue.clone(), PointerKind::Click);

    let listeners: [(&str, &JsValue); 3] = [
        ("scroll", on_scroll.as_ref()),
        ("mousemove", on_move.as_ref()),
        ("click", on_click.as_ref()),
    ];
    for (name, callback) in listeners {
        if let Err(err) = window.add_event_listener_with_callback(name, callback.unchecked_ref()) {
            error!("Failed to register {} listener: {:?}", name, err);
        }
    }

    // Listeners live as long as the page; hand the closures to JS.
    on_scroll.forget();
    on_move.forget();
    on_click.forget();

    // The page may open already scrolled.
    let top = document_top().unwrap_or_default();
    commands.insert_resource(ScrollOffset { top });
    commands.insert_resource(queue);
}
