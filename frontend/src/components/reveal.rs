use yew::prelude::*;

use crate::motion::reveal::{use_in_view, Threshold};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub threshold: Threshold,
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let in_view = use_in_view(props.threshold);

    html! {
        <div
            ref={in_view.node}
            class={classes!(
                props.class.clone(),
                "reveal",
                in_view.visibility.is_revealed().then(|| "visible")
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::Reflect;
    use web_sys::Element;

    #[function_component(Section)]
    fn section() -> Html {
        html! {
            <Reveal class="section-body">
                <p>{"content"}</p>
            </Reveal>
        }
    }

    fn root_at(top: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute("style", &format!("position: fixed; top: {}; left: 0; width: 200px; height: 100px;", top))
            .unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn wrapper_class(root: &Element) -> String {
        root.first_element_child().map(|el| el.class_name()).unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn on_screen_section_is_revealed() {
        let root = root_at("0");
        let handle = yew::Renderer::<Section>::with_root(root.clone()).render();

        TimeoutFuture::new(200).await;
        assert_eq!(wrapper_class(&root), "section-body reveal visible");

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn off_screen_section_stays_hidden() {
        let root = root_at("-2000px");
        let handle = yew::Renderer::<Section>::with_root(root.clone()).render();

        TimeoutFuture::new(200).await;
        assert_eq!(wrapper_class(&root), "section-body reveal");

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn section_without_observer_is_shown() {
        let window = web_sys::window().unwrap();
        let real = Reflect::get(&window, &"IntersectionObserver".into()).unwrap();
        Reflect::delete_property(&window, &"IntersectionObserver".into()).unwrap();

        let root = root_at("-2000px");
        let handle = yew::Renderer::<Section>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        let class = wrapper_class(&root);

        handle.destroy();
        root.remove();
        Reflect::set(&window, &"IntersectionObserver".into(), &real).unwrap();
        assert_eq!(class, "section-body reveal visible");
    }
}
