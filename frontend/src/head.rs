use web_sys::{Document, Element};
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const LANDING_META: PageMeta = PageMeta {
    title: "Mistakr — 실패도 자산이에요",
    description: "남의 실패에서 배우면, 내 성공 확률이 올라가요. 스타트업 실패 사례를 시각화하고, AI로 내 아이디어의 리스크를 미리 점검하세요.",
};

pub const SUPPORT_META: PageMeta = PageMeta {
    title: "고객 지원 — Mistakr",
    description: "미스테이커 앱 사용 중 문의 사항이 있으시면 아래 이메일로 연락해주세요.",
};

/// Writes title, description and open graph tags for the current page.
pub fn apply(meta: &PageMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(meta.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", "ko");
    }

    set_meta(&document, "name", "description", meta.description);
    set_meta(&document, "property", "og:title", meta.title);
    set_meta(&document, "property", "og:description", meta.description);
    set_meta(&document, "property", "og:type", "website");
}

fn set_meta(document: &Document, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}=\"{}\"]", attr, key);
    let element = match document.query_selector(&selector).ok().flatten() {
        Some(element) => element,
        None => match create_meta(document, attr, key) {
            Some(element) => element,
            None => return,
        },
    };
    let _ = element.set_attribute("content", content);
}

fn create_meta(document: &Document, attr: &str, key: &str) -> Option<Element> {
    let element = document.create_element("meta").ok()?;
    element.set_attribute(attr, key).ok()?;
    document.head()?.append_child(&element).ok()?;
    Some(element)
}

#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with_deps(
        move |meta| {
            apply(meta);
            || ()
        },
        meta,
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn meta_tags_are_created_once_and_updated() {
        let document = web_sys::window().unwrap().document().unwrap();

        apply(&LANDING_META);
        apply(&SUPPORT_META);

        assert_eq!(document.title(), SUPPORT_META.title);
        let tags = document.query_selector_all("meta[name=\"description\"]").unwrap();
        assert_eq!(tags.length(), 1);
        let og_title = document.query_selector("meta[property=\"og:title\"]").unwrap().unwrap();
        assert_eq!(og_title.get_attribute("content").as_deref(), Some(SUPPORT_META.title));
    }
}
