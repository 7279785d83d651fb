use std::cell::RefCell;

use log::debug;
use yew::prelude::*;

use crate::motion::count_up::{CountUpAnimator, Frame, DEFAULT_DURATION_MS};
use crate::motion::frame::{now_ms, FrameLoop};
use crate::motion::reveal::{use_in_view, Threshold, Visibility};

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub end: i64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: u32,
}

/// Counts from zero up to `end` once half of it is on screen.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let in_view = use_in_view(Threshold::COUNTER);
    let text = use_state_eq(String::new);
    let animator = use_mut_ref(|| CountUpAnimator::new(props.end, props.duration_ms));

    {
        let text = text.clone();
        let animator = animator.clone();
        let end = props.end;
        let duration_ms = props.duration_ms;
        let suffix = props.suffix.clone();
        use_effect_with_deps(
            move |visibility| {
                let mut frames = None;

                {
                    let mut state = animator.borrow_mut();
                    if state.is_idle() {
                        // A run keeps the props it started with
                        *state = CountUpAnimator::new(end, duration_ms);
                    }
                }

                match visibility {
                    Visibility::Pending => {}
                    Visibility::Unobservable => {
                        text.set(settled_text(&animator, &suffix));
                    }
                    Visibility::Visible => {
                        let started = animator.borrow_mut().trigger(now_ms());
                        if started {
                            debug!("count-up to {} started", end);
                            let first = animator.borrow().render(&suffix);
                            text.set(first);

                            let setter = text.setter();
                            let looped = animator.clone();
                            let looped_suffix = suffix.clone();
                            let started_loop = FrameLoop::start(move |timestamp| {
                                let (frame, rendered) = {
                                    let mut state = looped.borrow_mut();
                                    (state.tick(timestamp), state.render(&looped_suffix))
                                };
                                setter.set(rendered);
                                if frame == Frame::Finished {
                                    debug!("count-up to {} settled", end);
                                }
                                frame == Frame::Again
                            });
                            match started_loop {
                                Ok(live) => frames = Some(live),
                                Err(_) => text.set(settled_text(&animator, &suffix)),
                            }
                        }
                    }
                }

                // Unmount cancels any frame still queued
                move || drop(frames)
            },
            in_view.visibility,
        );
    }

    // Before the run starts the text follows the current suffix
    let shown = if animator.borrow().is_idle() {
        format!("0{}", props.suffix)
    } else {
        (*text).clone()
    };

    html! {
        <span ref={in_view.node}>
            { shown }
        </span>
    }
}

fn settled_text(animator: &RefCell<CountUpAnimator>, suffix: &str) -> String {
    let mut state = animator.borrow_mut();
    state.settle();
    state.render(suffix)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::rc::Rc;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::{Function, Reflect};
    use web_sys::Element;

    /// Root pinned to the top-left corner so the counter is fully on screen.
    fn on_screen_root() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute("style", "position: fixed; top: 0; left: 0; width: 300px; height: 80px; font-size: 40px;")
            .unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn off_screen_root() -> Element {
        let root = on_screen_root();
        root.set_attribute("style", "position: fixed; top: -2000px; left: 0; width: 300px; height: 80px;")
            .unwrap();
        root
    }

    fn text_of(root: &Element) -> String {
        root.text_content().unwrap_or_default().trim().to_string()
    }

    fn props(end: i64, suffix: &'static str) -> CountUpProps {
        CountUpProps {
            end,
            suffix: suffix.into(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Shadows a window property for the lifetime of the guard.
    struct WindowOverride {
        key: &'static str,
        original: Option<JsValue>,
    }

    impl WindowOverride {
        fn remove(key: &'static str) -> Self {
            let window = web_sys::window().unwrap();
            let original = Reflect::get(&window, &key.into()).ok();
            Reflect::delete_property(&window, &key.into()).unwrap();
            Self { key, original }
        }

        fn replace(key: &'static str, value: &JsValue) -> Self {
            let window = web_sys::window().unwrap();
            let original = Reflect::get(&window, &key.into()).ok();
            Reflect::set(&window, &key.into(), value).unwrap();
            Self { key, original }
        }
    }

    impl Drop for WindowOverride {
        fn drop(&mut self) {
            let window = web_sys::window().unwrap();
            if let Some(original) = &self.original {
                let _ = Reflect::set(&window, &self.key.into(), original);
            }
        }
    }

    #[wasm_bindgen_test]
    async fn counts_to_end_with_suffix() {
        let root = on_screen_root();
        let handle = yew::Renderer::<CountUp>::with_root_and_props(root.clone(), props(7, "가지")).render();

        TimeoutFuture::new(2400).await;
        assert_eq!(text_of(&root), "7가지");

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn unmounting_mid_run_freezes_the_dom() {
        let root = on_screen_root();
        let handle = yew::Renderer::<CountUp>::with_root_and_props(root.clone(), props(100_000, "+")).render();

        TimeoutFuture::new(500).await;
        let mid: i64 = text_of(&root).trim_end_matches('+').parse().unwrap();
        assert!(mid > 0 && mid < 100_000, "expected a value mid-run, got {}", mid);

        handle.destroy();
        let after_destroy = text_of(&root);
        TimeoutFuture::new(300).await;
        assert_eq!(text_of(&root), after_destroy);

        root.remove();
    }

    #[wasm_bindgen_test]
    async fn missing_observer_shows_end_value() {
        let root = on_screen_root();
        let _no_observer = WindowOverride::remove("IntersectionObserver");
        let handle = yew::Renderer::<CountUp>::with_root_and_props(root.clone(), props(500, "+")).render();

        TimeoutFuture::new(100).await;
        assert_eq!(text_of(&root), "500+");

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn failed_frame_request_shows_end_value() {
        let root = on_screen_root();
        let throwing = Function::new_no_args("throw new Error('frames disabled');");
        let _no_frames = WindowOverride::replace("requestAnimationFrame", &throwing);
        let handle = yew::Renderer::<CountUp>::with_root_and_props(root.clone(), props(90, "%")).render();

        TimeoutFuture::new(300).await;
        assert_eq!(text_of(&root), "90%");

        handle.destroy();
        root.remove();
    }

    #[derive(Clone, Default)]
    struct SuffixSlot(Rc<RefCell<Option<UseStateSetter<AttrValue>>>>);

    impl PartialEq for SuffixSlot {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    #[derive(Properties, PartialEq)]
    struct SuffixHostProps {
        slot: SuffixSlot,
    }

    #[function_component(SuffixHost)]
    fn suffix_host(props: &SuffixHostProps) -> Html {
        let suffix = use_state(|| AttrValue::from("+"));
        *props.slot.0.borrow_mut() = Some(suffix.setter());
        html! { <CountUp end={500} suffix={(*suffix).clone()} /> }
    }

    #[wasm_bindgen_test]
    async fn pending_counter_follows_suffix_changes() {
        let root = off_screen_root();
        let slot = SuffixSlot::default();
        let handle = yew::Renderer::<SuffixHost>::with_root_and_props(root.clone(), SuffixHostProps { slot: slot.clone() })
            .render();

        TimeoutFuture::new(100).await;
        assert_eq!(text_of(&root), "0+");

        let setter = slot.0.borrow().clone().unwrap();
        setter.set(AttrValue::from("건"));
        TimeoutFuture::new(100).await;
        assert_eq!(text_of(&root), "0건");

        handle.destroy();
        root.remove();
    }
}
