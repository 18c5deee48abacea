use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, KeyboardEvent, ResizeObserver, TouchEvent, WheelEvent, Window,
};
use yew::prelude::*;

use super::choreographer::{ChoreographyFrame, ScrollChoreographer};
use super::fade::PageGeometry;
use super::gallery::{scroll_key_delta, TouchDrag, WheelOutcome};
use crate::config::HomeVariant;

/// Elements the choreography reads from and paints into.
#[derive(Clone, Default, PartialEq)]
pub struct ChoreographyRefs {
    pub landing: NodeRef,
    pub header: NodeRef,
    pub gallery: NodeRef,
    pub track_viewport: NodeRef,
    pub track: NodeRef,
    pub about: NodeRef,
}

fn set_style(node: &NodeRef, style: &str) {
    if let Some(element) = node.cast::<Element>() {
        let _ = element.set_attribute("style", style);
    }
}

fn paint_track(track: &NodeRef, offset: f64) {
    set_style(
        track,
        &format!("transform: translate3d({:.2}px, 0, 0);", offset),
    );
}

fn measure(refs: &ChoreographyRefs, window: &Window) -> PageGeometry {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let gallery = refs.gallery.cast::<HtmlElement>();

    PageGeometry {
        viewport_height,
        gallery_top: gallery.as_ref().map_or(0.0, |el| el.offset_top() as f64),
        gallery_height: gallery.as_ref().map_or(0.0, |el| el.offset_height() as f64),
        about_top: refs
            .about
            .cast::<HtmlElement>()
            .map_or(0.0, |el| el.offset_top() as f64),
        track_width: refs
            .track
            .cast::<Element>()
            .map_or(0.0, |el| el.scroll_width() as f64),
        track_viewport_width: refs
            .track_viewport
            .cast::<Element>()
            .map_or(0.0, |el| el.client_width() as f64),
    }
}

struct FrameLoop {
    window: Window,
    refs: ChoreographyRefs,
    engine: RefCell<ScrollChoreographer>,
    pending: RefCell<Option<AnimationFrame>>,
    remeasure: Cell<bool>,
    touch: Cell<TouchDrag>,
}

impl FrameLoop {
    /// Queue one recomputation for the next animation frame. Calls made while
    /// a frame is already pending are folded into it.
    fn schedule(self: &Rc<Self>, remeasure: bool) {
        if remeasure {
            self.remeasure.set(true);
        }
        if self.pending.borrow().is_some() {
            return;
        }
        let frames = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            frames.pending.borrow_mut().take();
            frames.run();
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    fn run(&self) {
        if self.remeasure.replace(false) {
            let geometry = measure(&self.refs, &self.window);
            log::debug!("measured page geometry: {:?}", geometry);
            self.engine.borrow_mut().measure(geometry);
        }
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let frame = self.engine.borrow_mut().on_scroll(scroll_y);
        self.paint(&frame, scroll_y);
    }

    fn paint(&self, frame: &ChoreographyFrame, scroll_y: f64) {
        let visibility = &frame.visibility;
        set_style(&self.refs.landing, &visibility.landing.style());
        set_style(&self.refs.header, &visibility.landing.opacity_style());
        set_style(&self.refs.gallery, &visibility.gallery.style());
        set_style(&self.refs.about, &visibility.about.style());
        paint_track(&self.refs.track, frame.track_offset);

        if let Some(top) = frame.pin_to {
            if (scroll_y - top).abs() > 0.5 {
                self.window.scroll_to_with_x_and_y(0.0, top);
            }
        }
    }

    /// Feed a scroll delta from any input to the gallery lock and suppress
    /// the page scroll when the lock consumed it.
    fn feed(&self, event: &Event, source: &str, delta_y: f64) {
        let mut engine = self.engine.borrow_mut();
        let outcome = engine.on_wheel(delta_y);
        if outcome == WheelOutcome::Consumed {
            event.prevent_default();
        }
        log::trace!(
            "{} {} {:?}, gallery progress {:.3}",
            source,
            delta_y,
            outcome,
            engine.gallery_progress()
        );
        paint_track(&self.refs.track, engine.track_offset());
    }

    fn on_wheel(&self, event: &Event) {
        if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
            self.feed(event, "wheel", wheel.delta_y());
        }
    }

    fn on_touch_start(&self, event: &Event) {
        let Some(touch) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| event.touches().item(0))
        else {
            return;
        };
        let mut drag = self.touch.get();
        drag.start(touch.client_y() as f64);
        self.touch.set(drag);
    }

    fn on_touch_move(&self, event: &Event) {
        let Some(touch) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| event.touches().item(0))
        else {
            return;
        };
        let mut drag = self.touch.get();
        let delta = drag.move_to(touch.client_y() as f64);
        self.touch.set(drag);
        if let Some(delta) = delta {
            self.feed(event, "touch", delta);
        }
    }

    fn on_touch_end(&self) {
        let mut drag = self.touch.get();
        drag.end();
        self.touch.set(drag);
    }

    fn on_key(&self, event: &Event) {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.alt_key() || key.ctrl_key() || key.meta_key() {
            return;
        }
        // Space and arrows belong to focused controls.
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            if matches!(target.tag_name().as_str(), "BUTTON" | "INPUT" | "SELECT" | "TEXTAREA") {
                return;
            }
        }
        let viewport_height = self.engine.borrow().viewport_height();
        if let Some(delta) = scroll_key_delta(&key.key(), key.shift_key(), viewport_height) {
            self.feed(event, "key", delta);
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, ResizeObserver)>;

/// Keeps listeners, the resize observer and any pending frame alive for as
/// long as the page is mounted.
struct ChoreographyGuard {
    frames: Rc<FrameLoop>,
    _listeners: Vec<EventListener>,
    observer: Option<ResizeObserver>,
    _observer_callback: ObserverCallback,
}

impl Drop for ChoreographyGuard {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        self.frames.pending.borrow_mut().take();
    }
}

fn install(window: Window, variant: HomeVariant, refs: ChoreographyRefs) -> ChoreographyGuard {
    let frames = Rc::new(FrameLoop {
        window: window.clone(),
        refs: refs.clone(),
        engine: RefCell::new(ScrollChoreographer::new(variant)),
        pending: RefCell::new(None),
        remeasure: Cell::new(true),
        touch: Cell::new(TouchDrag::default()),
    });

    let mut listeners = Vec::new();
    {
        let frames = Rc::clone(&frames);
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            frames.schedule(false);
        }));
    }
    {
        let frames = Rc::clone(&frames);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            frames.schedule(true);
        }));
    }
    if frames.engine.borrow().locks_gallery() {
        {
            let frames = Rc::clone(&frames);
            listeners.push(EventListener::new_with_options(
                &window,
                "wheel",
                EventListenerOptions::enable_prevent_default(),
                move |event| frames.on_wheel(event),
            ));
        }
        {
            let frames = Rc::clone(&frames);
            listeners.push(EventListener::new(&window, "touchstart", move |event| {
                frames.on_touch_start(event);
            }));
        }
        {
            let frames = Rc::clone(&frames);
            listeners.push(EventListener::new_with_options(
                &window,
                "touchmove",
                EventListenerOptions::enable_prevent_default(),
                move |event| frames.on_touch_move(event),
            ));
        }
        for name in ["touchend", "touchcancel"] {
            let frames = Rc::clone(&frames);
            listeners.push(EventListener::new(&window, name, move |_| {
                frames.on_touch_end();
            }));
        }
        {
            let frames = Rc::clone(&frames);
            listeners.push(EventListener::new_with_options(
                &window,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| frames.on_key(event),
            ));
        }
    }

    let observer_callback: ObserverCallback = {
        let frames = Rc::clone(&frames);
        Closure::new(move |_entries: js_sys::Array, _observer: ResizeObserver| {
            frames.schedule(true);
        })
    };
    let observer = ResizeObserver::new(observer_callback.as_ref().unchecked_ref()).ok();
    match &observer {
        Some(observer) => {
            for node in [&refs.landing, &refs.gallery, &refs.track, &refs.about] {
                if let Some(element) = node.cast::<Element>() {
                    observer.observe(&element);
                }
            }
        }
        None => log::warn!("ResizeObserver unavailable, relying on window resize events"),
    }

    frames.schedule(true);

    ChoreographyGuard {
        frames,
        _listeners: listeners,
        observer,
        _observer_callback: observer_callback,
    }
}

/// Drives section fades and the gallery traversal of the home page from the
/// window's scroll position.
#[hook]
pub fn use_scroll_choreography(variant: HomeVariant, refs: ChoreographyRefs) {
    use_effect_with_deps(
        move |variant| {
            let guard = web_sys::window().map(|window| install(window, *variant, refs));
            move || drop(guard)
        },
        variant,
    );
}
