//! Bridge component between Leptos and the imperative `easel::Engine`.
//!
//! The engine owns capture state, stroke history, and the 2D context; this
//! host wires DOM pointer events into it, feeds it remote stroke broadcasts,
//! and uploads finalized strokes. The engine lives in an `Rc<RefCell<_>>`
//! because pointer handlers, the remote-stroke subscription, and the resize
//! listener all need it after the component function returns.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use easel::engine::{Action, Engine};
use easel::stroke::Point;

use crate::net::{bridge, events, rpc};
use crate::util::color::pen_color;

type SharedEngine = Rc<RefCell<Option<Engine>>>;

fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Redraw history when the window resizes; reconfiguring the backing store
/// wipes the surface and resets context state.
fn attach_resize_redraw(engine: &SharedEngine, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let engine = Rc::clone(engine);
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let (Some(engine), Some(canvas)) =
            (engine.borrow_mut().as_mut(), canvas_ref.get_untracked())
        {
            engine.reset_surface(&canvas);
        }
    });
    if window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .is_err()
    {
        leptos::logging::warn!("could not attach the resize listener");
    }
    closure.forget();
}

#[component]
pub fn EaselHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    let upload_error = RwSignal::new(None::<String>);

    // Build the engine once the canvas is in the DOM, then wire the feeds
    // that outlive this component.
    Effect::new({
        let engine = Rc::clone(&engine);
        move || {
            if engine.borrow().is_some() {
                return;
            }
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            match Engine::new(&canvas) {
                Ok(mut built) => {
                    built.set_pen_color(pen_color(bridge::page_var("color")));
                    *engine.borrow_mut() = Some(built);

                    events::on_remote_strokes({
                        let engine = Rc::clone(&engine);
                        move |strokes| {
                            if let Some(engine) = engine.borrow_mut().as_mut() {
                                engine.apply_remote(strokes);
                            }
                        }
                    });

                    attach_resize_redraw(&engine, canvas_ref);
                }
                Err(err) => leptos::logging::warn!("easel init failed: {err:?}"),
            }
        }
    });

    let on_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.pointer_down(pointer_point(&ev));
            }
        }
    };

    let on_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if engine.core.capture.is_drawing() {
                    ev.prevent_default();
                    engine.pointer_move(pointer_point(&ev));
                }
            }
        }
    };

    // Shared by pointer-up, -leave, and -cancel: finalize the gesture and
    // upload the stroke exactly once if one was committed.
    let finish = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let action = {
                let mut slot = engine.borrow_mut();
                let Some(engine) = slot.as_mut() else {
                    return;
                };
                if !engine.core.capture.is_drawing() {
                    return;
                }
                ev.prevent_default();
                engine.pointer_up()
            };
            if let Action::StrokeCommitted(stroke) = action {
                let upload = stroke.to_upload();
                leptos::task::spawn_local(async move {
                    match rpc::send_stroke(&upload).await {
                        Ok(()) => upload_error.set(None),
                        Err(err) => {
                            leptos::logging::warn!("{err}");
                            upload_error.set(Some(err.to_string()));
                        }
                    }
                });
            }
        }
    };
    let on_up = finish.clone();
    let on_leave = finish.clone();
    let on_cancel = finish;

    let on_clear = {
        let engine = Rc::clone(&engine);
        move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.clear();
            }
        }
    };

    view! {
        <div class="easel">
            <canvas
                class="easel__surface"
                node_ref=canvas_ref
                on:pointerdown=on_down
                on:pointermove=on_move
                on:pointerup=on_up
                on:pointerleave=on_leave
                on:pointercancel=on_cancel
            ></canvas>
            <div class="easel__controls">
                <button type="button" class="easel__clear" on:click=on_clear>
                    "Clear my board"
                </button>
            </div>
            <Show when=move || upload_error.get().is_some()>
                <p class="easel__error">
                    {move || upload_error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
