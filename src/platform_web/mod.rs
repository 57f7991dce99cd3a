//! Browser binding for [`InputController`].
//!
//! [`install`] wires the controller into the live document: directional
//! keys, drag scrolling with capture-phase click suppression, the reveal
//! observer and stylesheet, and the `message` scroll bridge.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use js_sys::{Array, Reflect};
use serde_json::{Number, Value};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MessageEvent, MouseEvent, ScrollToOptions, Window,
};

use crate::api::{InputController, InputControlsConfig, ScrollHost};
use crate::core::{
    EventDisposition, FrameId, KeyInput, PointerButton, PointerInput, ScrollBehavior, SettleToken,
};
use crate::error::{ScrollError, ScrollResult};
use crate::reveal::{ElementId, IntersectionEntry};

type SharedController = Rc<RefCell<InputController<WebScrollHost>>>;
type ControllerSlot = Rc<RefCell<Weak<RefCell<InputController<WebScrollHost>>>>>;

fn js_error(context: &str, value: JsValue) -> ScrollError {
    ScrollError::Host(format!("{context}: {value:?}"))
}

fn web_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    }
}

/// `ScrollHost` backed by `window`, `<html>` and `<body>`.
pub struct WebScrollHost {
    window: Window,
    root: HtmlElement,
    body: HtmlElement,
    elements: Vec<Element>,
    revealed_class: String,
    frames: HashMap<FrameId, i32>,
    slot: ControllerSlot,
}

impl WebScrollHost {
    fn element_id(&self, target: &Element) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element == target)
            .map(ElementId)
    }
}

impl ScrollHost for WebScrollHost {
    fn scroll_top(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) -> ScrollResult<()> {
        let options = ScrollToOptions::new();
        options.set_top(delta);
        options.set_behavior(web_behavior(behavior));
        self.window.scroll_by_with_scroll_to_options(&options);
        Ok(())
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) -> ScrollResult<()> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_behavior(behavior));
        self.window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    fn override_scroll_behavior(&mut self, behavior: ScrollBehavior) -> ScrollResult<()> {
        // CSS only knows `auto` (instant) and `smooth`.
        let value = match behavior {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "auto",
        };
        self.root
            .style()
            .set_property("scroll-behavior", value)
            .map_err(|e| js_error("set scroll-behavior", e))
    }

    fn restore_scroll_behavior(&mut self) -> ScrollResult<()> {
        self.root
            .style()
            .remove_property("scroll-behavior")
            .map(|_| ())
            .map_err(|e| js_error("restore scroll-behavior", e))
    }

    fn set_grabbing(&mut self, grabbing: bool) -> ScrollResult<()> {
        let style = self.body.style();
        let result = if grabbing {
            style.set_property("cursor", "grabbing")
        } else {
            style.remove_property("cursor").map(|_| ())
        };
        result.map_err(|e| js_error("set cursor", e))
    }

    fn request_frame(&mut self, frame: FrameId) -> ScrollResult<()> {
        let slot = Rc::clone(&self.slot);
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            with_controller(&slot, |controller| {
                controller.host_mut().frames.remove(&frame);
                controller.animation_frame(frame)
            });
        });
        let handle = self
            .window
            .request_animation_frame(callback.unchecked_ref())
            .map_err(|e| js_error("requestAnimationFrame", e))?;
        self.frames.insert(frame, handle);
        Ok(())
    }

    fn cancel_frame(&mut self, frame: FrameId) -> ScrollResult<()> {
        match self.frames.remove(&frame) {
            Some(handle) => self
                .window
                .cancel_animation_frame(handle)
                .map_err(|e| js_error("cancelAnimationFrame", e)),
            None => Ok(()),
        }
    }

    fn schedule_settle(&mut self, token: SettleToken) -> ScrollResult<()> {
        let slot = Rc::clone(&self.slot);
        let callback = Closure::once_into_js(move || {
            with_controller(&slot, |controller| {
                controller.settle_gesture(token);
                Ok(())
            });
        });
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
            .map(|_| ())
            .map_err(|e| js_error("setTimeout", e))
    }

    fn mark_revealed(&mut self, element: ElementId) -> ScrollResult<()> {
        let Some(target) = self.elements.get(element.0) else {
            return Ok(());
        };
        target
            .class_list()
            .add_1(&self.revealed_class)
            .map_err(|e| js_error("classList.add", e))
    }
}

fn with_controller(
    slot: &ControllerSlot,
    f: impl FnOnce(&mut InputController<WebScrollHost>) -> ScrollResult<()>,
) {
    let Some(controller) = slot.borrow().upgrade() else {
        return;
    };
    let Ok(mut controller) = controller.try_borrow_mut() else {
        warn!("input controller re-entered from a browser callback");
        return;
    };
    if let Err(err) = f(&mut controller) {
        warn!(error = %err, "input controller callback failed");
    }
}

fn dispatch(
    slot: &ControllerSlot,
    event: &Event,
    f: impl FnOnce(&mut InputController<WebScrollHost>) -> ScrollResult<EventDisposition>,
) {
    with_controller(slot, |controller| {
        let (disposition, result) = match f(controller) {
            Ok(disposition) => (disposition, Ok(())),
            Err(err) => (err.disposition().unwrap_or_default(), Err(err)),
        };
        if disposition.prevent_default {
            event.prevent_default();
        }
        if disposition.stop_propagation {
            event.stop_propagation();
        }
        result
    });
}

fn pointer_input(event: &Event) -> Option<PointerInput> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(PointerInput::new(
        PointerButton::from_index(event.button()),
        f64::from(event.page_x()),
        f64::from(event.page_y()),
    ))
}

/// Converts a structured-clone message payload into the bridge's JSON shape.
///
/// Strings are dropped unparsed; only objects can carry a scroll request.
fn message_payload(data: &JsValue) -> Option<Value> {
    if !data.is_object() {
        return None;
    }
    let scroll = Reflect::get(data, &JsValue::from_str("scroll")).ok()?;
    let mut payload = serde_json::Map::new();
    if let Some(number) = scroll.as_f64().and_then(Number::from_f64) {
        payload.insert("scroll".to_owned(), Value::Number(number));
    }
    Some(Value::Object(payload))
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

/// Installed controls. Dropping removes every listener and the observer.
pub struct WebInputControls {
    controller: SharedController,
    listeners: Vec<Listener>,
    observer: Option<IntersectionObserver>,
    _observer_callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl WebInputControls {
    #[must_use]
    pub fn controller(&self) -> SharedController {
        Rc::clone(&self.controller)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> ScrollResult<()> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback_and_bool(
                kind,
                callback.as_ref().unchecked_ref(),
                capture,
            )
            .map_err(|e| js_error(kind, e))?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            capture,
            callback,
        });
        Ok(())
    }
}

impl Drop for WebInputControls {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback_and_bool(
                listener.kind,
                listener.callback.as_ref().unchecked_ref(),
                listener.capture,
            );
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            if let Err(err) = controller.pointer_leave() {
                warn!(error = %err, "failed to release gesture on uninstall");
            }
        }
    }
}

/// Installs the controls on the current window's document.
pub fn install(config: InputControlsConfig) -> ScrollResult<WebInputControls> {
    let window =
        web_sys::window().ok_or_else(|| ScrollError::Host("no global window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ScrollError::Host("window has no document".to_owned()))?;
    let root = document
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ScrollError::Host("document has no html root".to_owned()))?;
    let body = document
        .body()
        .ok_or_else(|| ScrollError::Host("document has no body".to_owned()))?;

    if config.reveal.inject_stylesheet {
        let head = document
            .head()
            .ok_or_else(|| ScrollError::Host("document has no head".to_owned()))?;
        let style = document
            .create_element("style")
            .map_err(|e| js_error("create style", e))?;
        let css = config.reveal.stylesheet();
        style.set_text_content(Some(css.as_str()));
        head.append_child(&style)
            .map_err(|e| js_error("append style", e))?;
    }

    let nodes = document
        .query_selector_all(&config.reveal.marker_selector())
        .map_err(|e| js_error("query marked elements", e))?;
    let elements: Vec<Element> = (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    let slot: ControllerSlot = Rc::new(RefCell::new(Weak::new()));
    let threshold = config.reveal.threshold;
    let host = WebScrollHost {
        window: window.clone(),
        root,
        body,
        elements: elements.clone(),
        revealed_class: config.reveal.revealed_class.clone(),
        frames: HashMap::new(),
        slot: Rc::clone(&slot),
    };
    let mut controller = InputController::new(host, config)?;
    for index in 0..elements.len() {
        controller.observe_element(ElementId(index));
    }
    let controller = Rc::new(RefCell::new(controller));
    *slot.borrow_mut() = Rc::downgrade(&controller);

    let mut controls = WebInputControls {
        controller,
        listeners: Vec::new(),
        observer: None,
        _observer_callback: None,
    };

    let observer_slot = Rc::clone(&slot);
    let observer_callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            with_controller(&observer_slot, |controller| {
                let batch: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = controller.host().element_id(&entry.target())?;
                        Some(IntersectionEntry::new(
                            target,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        ))
                    })
                    .collect();
                controller.intersections(&batch).map(|_| ())
            });
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(observer_callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| js_error("IntersectionObserver", e))?;
    for element in &elements {
        observer.observe(element);
    }
    controls.observer = Some(observer);
    controls._observer_callback = Some(observer_callback);

    let document_target: EventTarget = document.into();
    let window_target: EventTarget = window.into();

    let s = Rc::clone(&slot);
    controls.listen(&document_target, "keydown", false, move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let input = KeyInput::new(key_event.key(), key_event.key_code());
        dispatch(&s, &event, |controller| controller.key_down(&input));
    })?;

    let s = Rc::clone(&slot);
    controls.listen(&window_target, "dragstart", false, move |event| {
        dispatch(&s, &event, |controller| Ok(controller.drag_start()));
    })?;

    let s = Rc::clone(&slot);
    controls.listen(&document_target, "mousedown", false, move |event| {
        let Some(input) = pointer_input(&event) else {
            return;
        };
        dispatch(&s, &event, |controller| controller.pointer_down(input));
    })?;

    let s = Rc::clone(&slot);
    controls.listen(&document_target, "mousemove", false, move |event| {
        let Some(input) = pointer_input(&event) else {
            return;
        };
        dispatch(&s, &event, |controller| controller.pointer_move(input));
    })?;

    let s = Rc::clone(&slot);
    controls.listen(&document_target, "mouseup", false, move |event| {
        dispatch(&s, &event, |controller| controller.pointer_up());
    })?;

    let s = Rc::clone(&slot);
    controls.listen(&document_target, "mouseleave", false, move |event| {
        dispatch(&s, &event, |controller| controller.pointer_leave());
    })?;

    let s = Rc::clone(&slot);
    controls.listen(&document_target, "click", true, move |event| {
        dispatch(&s, &event, |controller| Ok(controller.click()));
    })?;

    let s = Rc::clone(&slot);
    controls.listen(&window_target, "message", false, move |event| {
        let Some(message) = event.dyn_ref::<MessageEvent>() else {
            return;
        };
        let Some(payload) = message_payload(&message.data()) else {
            return;
        };
        with_controller(&s, |controller| controller.receive_message(&payload).map(|_| ()));
    })?;

    debug!(
        observed = elements.len(),
        "remote scroll controls installed"
    );
    Ok(controls)
}
