//! Ambient blob entry point
//!
//! Mounts one effect instance per `canvas[data-blob]` element and drives
//! each with its own animation-frame loop. Event handlers only write shared
//! input fields; all simulation and painting happens in the tick.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_effect {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry, MouseEvent, TouchEvent,
    };

    use ambient_blob::consts::{MAX_SUBSTEPS, SIM_DT};
    use ambient_blob::options::BlobOptions;
    use ambient_blob::renderer::{plan_frame, CanvasPainter};
    use ambient_blob::sim::{tick, EffectState, ScrollFade, TickInput};

    /// One mounted effect instance
    struct Instance {
        state: EffectState,
        painter: CanvasPainter,
        canvas: HtmlCanvasElement,
        // Shared input fields - written by event handlers, consumed by the tick
        pointer: Option<Vec2>,
        scroll_y: f32,
        viewport_h: f32,
        visible: bool,
        alive: bool,
        accumulator: f32,
        last_time: f64,
        applied_fade: ScrollFade,
    }

    impl Instance {
        fn new(state: EffectState, painter: CanvasPainter, canvas: HtmlCanvasElement) -> Self {
            Self {
                state,
                painter,
                canvas,
                pointer: None,
                scroll_y: 0.0,
                viewport_h: 0.0,
                // Observing until the intersection observer reports in
                visible: false,
                alive: true,
                accumulator: 0.0,
                last_time: 0.0,
                applied_fade: ScrollFade::IDENTITY,
            }
        }

        /// Advance the simulation and paint one animation frame
        fn frame(&mut self, time: f64, dark: bool) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            self.last_time = time;

            // Hidden: skip all computation but stay scheduled, so scrolling
            // back into view resumes instantly with physics intact
            if !self.visible {
                self.accumulator = 0.0;
                return;
            }

            self.accumulator += dt.min(0.1);
            let input = TickInput {
                pointer: self.pointer,
                scroll_y: self.scroll_y,
                viewport_h: self.viewport_h,
                visible: true,
            };
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Drop the backlog after a long stall instead of fast-forwarding
                self.accumulator = 0.0;
            }

            let plan = plan_frame(&self.state, dark);
            self.painter.paint(&plan, self.state.surface);
            self.apply_scroll_fade();
        }

        /// Scroll-linked fade/parallax, applied as element styles so it
        /// composites independently of the simulation
        fn apply_scroll_fade(&mut self) {
            let fade = ScrollFade::derive(
                self.scroll_y,
                self.viewport_h,
                self.state.effective_static(),
            );
            if fade == self.applied_fade {
                return;
            }
            self.applied_fade = fade;

            let style = self.canvas.style();
            let filter = if fade.blur > 0.01 {
                format!("blur({:.2}px)", fade.blur)
            } else {
                String::new()
            };
            let _ = style.set_property("filter", &filter);
            let _ = style.set_property("opacity", &format!("{:.3}", fade.opacity));
            let _ = style.set_property("transform", &format!("translateY({:.1}px)", fade.translate_y));
        }

        /// Rescale the backing store. Physics state is deliberately kept.
        fn resize(&mut self) {
            let surface = self.painter.resize_to_container();
            self.state.resize(surface);
        }
    }

    /// Dark-theme flag: the `dark` class on the document element
    fn dark_theme() -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|e| e.class_list().contains("dark"))
            .unwrap_or(false)
    }

    fn prefers_reduced_motion() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        log::info!("ambient-blob starting...");

        match mount_all() {
            0 => log::info!("no canvas[data-blob] elements found"),
            n => log::info!("mounted {n} blob instance(s)"),
        }
    }

    fn mount_all() -> usize {
        let Some(window) = web_sys::window() else {
            return 0;
        };
        let Some(document) = window.document() else {
            return 0;
        };
        let Ok(list) = document.query_selector_all("canvas[data-blob]") else {
            return 0;
        };

        // Instances without an explicit seed draw decorrelated ones here, so
        // several blobs on one page never pulse in sync
        let mut seed_rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);
        let reduced = prefers_reduced_motion();
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;

        let mut mounted = 0;
        for i in 0..list.length() {
            let Some(node) = list.item(i) else { continue };
            let Ok(canvas) = node.dyn_into::<HtmlCanvasElement>() else {
                continue;
            };

            let options = canvas
                .get_attribute("data-blob")
                .map(|json| BlobOptions::from_json(&json))
                .unwrap_or_default();
            let seed = options.seed_or(seed_rng.random_range(0.0..256.0));

            // Decorative effect: no context means no blob, never an error
            let Some(mut painter) = CanvasPainter::new(canvas.clone()) else {
                log::warn!("2d context unavailable, skipping blob instance {i}");
                continue;
            };
            let surface = painter.resize_to_container();

            let mut state = EffectState::new(options, seed, surface);
            state.reduced_motion = state.reduced_motion || reduced;

            let instance = Rc::new(RefCell::new(Instance::new(state, painter, canvas)));
            {
                let mut inst = instance.borrow_mut();
                inst.scroll_y = scroll_y;
                inst.viewport_h = viewport_h;
            }

            setup_pointer_handlers(&instance);
            setup_scroll_handler(&instance);
            setup_resize_handler(&instance);
            setup_visibility_observer(&instance);
            setup_teardown(&instance);
            request_animation_frame(instance);
            mounted += 1;
        }
        mounted
    }

    fn setup_pointer_handlers(instance: &Rc<RefCell<Instance>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Mouse move - surface-relative coordinates, tracked even when the
        // cursor is outside the canvas (drift/spring keep working at range)
        {
            let instance = instance.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut inst = instance.borrow_mut();
                let rect = inst.canvas.get_bounding_client_rect();
                inst.pointer = Some(Vec2::new(
                    event.client_x() as f32 - rect.left() as f32,
                    event.client_y() as f32 - rect.top() as f32,
                ));
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Cursor left the page entirely
        {
            let instance = instance.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                instance.borrow_mut().pointer = None;
            });
            let _ = document
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - first touch acts as the pointer
        {
            let instance = instance.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let mut inst = instance.borrow_mut();
                    let rect = inst.canvas.get_bounding_client_rect();
                    inst.pointer = Some(Vec2::new(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    ));
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end clears the pointer
        {
            let instance = instance.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                instance.borrow_mut().pointer = None;
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_scroll_handler(instance: &Rc<RefCell<Instance>>) {
        let window = web_sys::window().unwrap();
        let instance = instance.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(w) = web_sys::window() {
                let mut inst = instance.borrow_mut();
                inst.scroll_y = w.scroll_y().unwrap_or(0.0) as f32;
                inst.viewport_h = w
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32;
            }
        });
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize_handler(instance: &Rc<RefCell<Instance>>) {
        let window = web_sys::window().unwrap();
        let instance = instance.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut inst = instance.borrow_mut();
            inst.resize();
            if let Some(w) = web_sys::window() {
                inst.viewport_h = w
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32;
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_visibility_observer(instance: &Rc<RefCell<Instance>>) {
        let inst = instance.clone();
        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                    inst.borrow_mut().visible = entry.is_intersecting();
                }
            },
        );
        match IntersectionObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&instance.borrow().canvas);
                closure.forget();
            }
            Err(e) => {
                // No observer support: run always-visible rather than never
                log::warn!("IntersectionObserver unavailable: {e:?}");
                instance.borrow_mut().visible = true;
            }
        }
    }

    fn setup_teardown(instance: &Rc<RefCell<Instance>>) {
        let window = web_sys::window().unwrap();
        let instance = instance.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            // Terminal: stop rescheduling, the page is going away
            instance.borrow_mut().alive = false;
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(instance: Rc<RefCell<Instance>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| effect_loop(instance, time));
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn effect_loop(instance: Rc<RefCell<Instance>>, time: f64) {
        {
            let mut inst = instance.borrow_mut();
            if !inst.alive {
                return;
            }
            let dark = dark_theme();
            inst.frame(time, dark);
        }
        request_animation_frame(instance);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_effect::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("ambient-blob (native) starting...");
    log::info!("The effect paints a browser canvas - build with trunk for the web version");

    println!("\nRunning sim smoke check...");
    smoke_check();
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use ambient_blob::consts::STRETCH_MAX;
    use ambient_blob::sim::{tick, EffectState, TickInput};
    use ambient_blob::BlobOptions;
    use glam::Vec2;

    let mut state = EffectState::new(BlobOptions::default(), 3.0, Vec2::new(800.0, 600.0));
    let input = TickInput {
        pointer: Some(Vec2::new(400.0, 300.0)),
        viewport_h: 900.0,
        ..Default::default()
    };
    for _ in 0..240 {
        tick(&mut state, &input);
        assert!(state.stretch.amount <= STRETCH_MAX);
    }
    assert!(state.center().is_finite());
    assert!(state.ripples.len() <= 1);
    println!("✓ Sim smoke check passed!");
}
