use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::head::{use_page_meta, SUPPORT_META};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class="faq-item">
            <p class="faq-question">{&props.question}</p>
            <p class="faq-answer">
                { for props.children.iter() }
            </p>
        </div>
    }
}

#[function_component(Support)]
pub fn support() -> Html {
    use_page_meta(SUPPORT_META);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="support-page">
            <div class="support-content">
                <h1>{"고객 지원"}</h1>
                <p class="support-intro">
                    {"미스테이커 앱 사용 중 문의 사항이 있으시면 아래 이메일로 연락해주세요."}
                </p>

                <div class="support-card">
                    <h2>{"이메일 문의"}</h2>
                    <p class="support-note">
                        {"문의 내용을 이메일로 보내주시면 영업일 기준 1~2일 내로 답변 드립니다."}
                    </p>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)} class="mail-button">
                        {CONTACT_EMAIL}
                    </a>
                </div>

                <div class="support-card">
                    <h2 class="faq-title">{"자주 묻는 질문"}</h2>
                    <div class="faq-list">
                        <FaqItem question="계정 삭제는 어떻게 하나요?">
                            {"프로필 탭 → 설정 → 계정 삭제에서 직접 탈퇴하실 수 있습니다."}
                        </FaqItem>
                        <FaqItem question="AI 진단 기능은 어떻게 작동하나요?">
                            {"입력하신 아이디어 텍스트를 Anthropic(Claude AI)에 전송하여 분석합니다. 전송 데이터 및 개인정보 처리에 대한 자세한 내용은 "}
                            <a href="/privacy" class="privacy-link">{"개인정보처리방침"}</a>
                            {"을 확인해주세요."}
                        </FaqItem>
                        <FaqItem question="로그인이 되지 않아요.">
                            {"소셜 로그인(구글/애플) 계정의 상태를 확인해주세요. 문제가 지속되면 이메일로 문의해주세요."}
                        </FaqItem>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .support-page {
                    min-height: 100vh;
                    background: #000000;
                    color: #ffffff;
                }
                .support-content {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .support-page h1 {
                    margin: 0 0 0.5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .support-intro {
                    margin: 0 0 3rem;
                    color: #9ca3af;
                }
                .support-card {
                    border: 1px solid #1f2937;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 2rem;
                }
                .support-card h2 {
                    margin: 0 0 0.25rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .support-card h2.faq-title {
                    margin-bottom: 1rem;
                }
                .support-note {
                    margin: 0 0 1rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .mail-button {
                    display: inline-block;
                    background: #ffffff;
                    color: #000000;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    text-decoration: none;
                    transition: background-color 0.2s ease;
                }
                .mail-button:hover {
                    background: #f3f4f6;
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .faq-question {
                    margin: 0 0 0.25rem;
                    font-weight: 500;
                }
                .faq-answer {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .privacy-link {
                    color: #d1d5db;
                    text-decoration: underline;
                }
                "#}
            </style>
        </main>
    }
}
