use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::head::{use_page_meta, LANDING_META};

struct Card {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const PROBLEMS: &[Card] = &[
    Card { icon: "🤐", title: "당사자는\n말하기 싫어해요", desc: "실패 경험은 아프니까요." },
    Card { icon: "📺", title: "미디어는\n관심이 없어요", desc: "성공 스토리가 더 잘 팔리거든요." },
    Card { icon: "🧩", title: "정보는\n파편화되어 있어요", desc: "흩어진 조각을 맞추기엔\n시간이 없죠." },
];

// (card, hover gradient)
const FEATURES: &[(Card, &str)] = &[
    (
        Card { icon: "🔍", title: "노드 그래프", desc: "실패의 인과관계를 한눈에.\n어디서 잘못됐는지 시각적으로 파악해요." },
        "linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2))",
    ),
    (
        Card { icon: "⏱", title: "타임라인 슬라이더", desc: "시간순으로 사건 흐름을 재생해요.\n마치 다큐멘터리처럼." },
        "linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2))",
    ),
    (
        Card { icon: "🎯", title: "스마트 필터", desc: "산업별, 실패유형별, 투자금액별.\n내 상황과 가장 비슷한 사례만 콕." },
        "linear-gradient(135deg, rgba(236, 72, 153, 0.2), rgba(249, 115, 22, 0.2))",
    ),
    (
        Card { icon: "💡", title: "교훈 카드", desc: "각 사례에서 뽑아낸 핵심 교훈.\n실패를 자산으로 바꾸는 순간." },
        "linear-gradient(135deg, rgba(249, 115, 22, 0.2), rgba(59, 130, 246, 0.2))",
    ),
];

const AI_STEPS: &[(&str, &str, &str)] = &[
    ("01", "아이디어 입력", "4단계로 간단하게. 기본정보부터 비즈니스 모델까지."),
    ("02", "유사 실패 매칭", "AI가 수백 개 사례에서 비슷한 실패 패턴을 찾아요."),
    ("03", "리스크 분석", "PMF, 재무, 경쟁 등 7가지 축으로 리스크 점수를 산출해요."),
    ("04", "액션 플랜", "위기 시점 예측과 지금 당장 실행할 체크리스트까지."),
];

struct Stat {
    end: i64,
    suffix: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { end: 500, suffix: "+", label: "수집된 실패 사례" },
    Stat { end: 7, suffix: "가지", label: "리스크 분석 축" },
    Stat { end: 90, suffix: "%", label: "스타트업 실패율" },
];

// (card, tag)
const AUDIENCES: &[(Card, &str)] = &[
    (
        Card { icon: "🚀", title: "예비 · 초기 창업자", desc: "\"이 아이디어 괜찮은 건가?\"\n비슷한 시도가 왜 실패했는지\n한눈에 파악하고 싶은 분" },
        "실패 사례 탐색",
    ),
    (
        Card { icon: "🎯", title: "스타트업 대표", desc: "지금 방향이 맞는지,\n어떤 리스크를 놓치고 있는지\n객관적으로 점검받고 싶은 분" },
        "AI 리스크 진단",
    ),
    (
        Card { icon: "💼", title: "투자자 · 멘토", desc: "투자 심사나 멘토링에서\n\"이전에 비슷한 시도가 왜 실패했는지\"\n레퍼런스가 필요한 분" },
        "데이터 활용",
    ),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="orbs">
                <div class="orb orb-blue animate-pulse-slow"></div>
                <div class="orb orb-violet animate-pulse-slow delay-500"></div>
            </div>

            <div class="hero-content">
                <div class="hero-badge animate-fade-up">
                    {"실패를 자산으로 바꾸는 첫 번째 서비스"}
                </div>
                <h1 class="hero-title staggered animate-fade-up delay-100">
                    {"남의 실패에서 배우면,"}
                    <br />
                    <span class="gradient-text">{"내 성공 확률이 올라가요"}</span>
                </h1>
                <p class="hero-subtitle staggered animate-fade-up delay-200">
                    {"성공 사례는 넘쳐나는데, 실패 사례는 묻혀요."}
                    <br />
                    {"Mistakr가 그 실패를 꺼내서 당신의 자산으로 만들어 드릴게요."}
                </p>
                <div class="hero-cta-group staggered animate-fade-up delay-300">
                    <button class="cta-primary">{"지금 시작하기"}</button>
                    <button class="cta-secondary">{"실패 사례 둘러보기"}</button>
                </div>
            </div>

            <div class="scroll-indicator staggered animate-fade-in delay-800">
                <span>{"scroll"}</span>
                <div class="scroll-line"></div>
            </div>
        </section>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section class="section">
            <Reveal class="section-body">
                <div class="section-heading">
                    <span class="eyebrow">{"PROBLEM"}</span>
                    <h2>
                        {"90%의 스타트업이 실패해요."}
                        <br />
                        {"근데 '왜'인지 아는 사람은"}
                        <br />
                        <span class="accent-red">{"거의 없어요."}</span>
                    </h2>
                </div>
                <div class="grid grid-3 narrow">
                    { for PROBLEMS.iter().enumerate().map(|(i, card)| html! {
                        <div class="problem-card" style={format!("animation-delay: {}s;", i as f64 * 0.15)}>
                            <span class="card-icon">{card.icon}</span>
                            <h3 class="pre-line">{card.title}</h3>
                            <p class="pre-line">{card.desc}</p>
                        </div>
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(SolutionSection)]
fn solution_section() -> Html {
    html! {
        <section class="section dark">
            <Reveal class="section-body">
                <div class="section-heading">
                    <span class="eyebrow">{"SOLUTION"}</span>
                    <h2>
                        {"Mistakr는"}
                        <br />
                        {"이 문제를 정면으로 풀어요."}
                    </h2>
                    <p class="lead">
                        {"실제 스타트업 실패 사례를 수집하고, 시각화해서"}
                        <br class="wide-only" />
                        {"\"어디서부터 잘못됐는지\"를 누구나 직관적으로 파악할 수 있게 했어요."}
                    </p>
                </div>
                <div class="grid grid-2">
                    { for FEATURES.iter().map(|(card, gradient)| html! {
                        <div class="feature-card">
                            <div class="feature-glow" style={format!("background: {};", gradient)}></div>
                            <span class="card-icon">{card.icon}</span>
                            <h3>{card.title}</h3>
                            <p class="pre-line">{card.desc}</p>
                        </div>
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(AiSection)]
fn ai_section() -> Html {
    let last = AI_STEPS.len() - 1;

    html! {
        <section class="section">
            <Reveal class="section-body">
                <div class="section-heading">
                    <span class="eyebrow violet">{"FAILURE AI"}</span>
                    <h2>
                        {"수백만 원짜리 컨설팅,"}
                        <br />
                        <span class="gradient-text">{"이제 AI가 해드릴게요."}</span>
                    </h2>
                    <p class="lead">
                        {"내 아이디어를 입력하면, 유사한 실패 사례를 자동 매칭하고"}
                        <br class="wide-only" />
                        {"7가지 리스크 점수를 산출해 드려요."}
                    </p>
                </div>
                <div class="steps">
                    { for AI_STEPS.iter().enumerate().map(|(i, (step, title, desc))| html! {
                        <div class="step">
                            <div class="step-marker">
                                <div class="step-number">{*step}</div>
                                if i < last {
                                    <div class="step-line"></div>
                                }
                            </div>
                            <div class="step-text">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(StatsSection)]
fn stats_section() -> Html {
    html! {
        <section class="section compact muted">
            <Reveal class="section-body">
                <h2>{"숫자로 보는 Mistakr"}</h2>
                <div class="grid grid-3">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <span class="stat-value">
                                <CountUp end={stat.end} suffix={stat.suffix} />
                            </span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(TargetSection)]
fn target_section() -> Html {
    html! {
        <section class="section">
            <Reveal class="section-body">
                <div class="section-heading">
                    <span class="eyebrow">{"FOR YOU"}</span>
                    <h2>
                        {"이런 분들을 위해"}
                        <br />
                        {"만들었어요."}
                    </h2>
                </div>
                <div class="grid grid-3">
                    { for AUDIENCES.iter().map(|(card, tag)| html! {
                        <div class="audience-card">
                            <span class="card-icon large">{card.icon}</span>
                            <span class="tag">{*tag}</span>
                            <h3>{card.title}</h3>
                            <p class="pre-line">{card.desc}</p>
                        </div>
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    html! {
        <section class="section compact dark cta">
            <div class="orbs">
                <div class="orb orb-blue large animate-pulse-slow"></div>
                <div class="orb orb-violet large animate-pulse-slow delay-500"></div>
            </div>
            <Reveal class="section-body cta-body">
                <h2>
                    {"실패도 자산이에요."}
                    <br />
                    <span class="gradient-text">{"지금 시작하세요."}</span>
                </h2>
                <p class="lead">
                    {"남의 실패에서 배워서, 내 성공 확률을 높이세요."}
                    <br />
                    {"Mistakr와 함께라면 실패는 더 이상 끝이 아니에요."}
                </p>
                <button class="cta-light">{"무료로 시작하기"}</button>
            </Reveal>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_page_meta(LANDING_META);

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
        <div class="landing-page">
            <Navbar />
            <main>
                <Hero />
                <ProblemSection />
                <SolutionSection />
                <AiSection />
                <StatsSection />
                <TargetSection />
                <CtaSection />
            </main>
            <Footer />
            <style>
                {r#"
                .hero {
                    position: relative;
                    display: flex;
                    min-height: 100vh;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 0 1.5rem;
                }
                .orbs {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .orb {
                    position: absolute;
                    border-radius: 9999px;
                    opacity: 0.06;
                    filter: blur(120px);
                }
                .orb-blue {
                    left: 25%;
                    top: 25%;
                    width: 500px;
                    height: 500px;
                    background: var(--blue-500);
                }
                .orb-violet {
                    right: 25%;
                    bottom: 25%;
                    width: 400px;
                    height: 400px;
                    background: var(--gradient-end);
                }
                .orb.large {
                    opacity: 0.08;
                    filter: blur(150px);
                }
                .orb-blue.large {
                    left: 33%;
                    top: 33%;
                    width: 600px;
                    height: 600px;
                }
                .orb-violet.large {
                    right: 33%;
                    bottom: 33%;
                    width: 500px;
                    height: 500px;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    text-align: center;
                }
                .staggered {
                    opacity: 0;
                }
                .hero-badge {
                    border-radius: 9999px;
                    border: 1px solid var(--gray-200);
                    background: white;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--gray-600);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .hero-title {
                    margin: 0;
                    max-width: 48rem;
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 1.25;
                    letter-spacing: -0.025em;
                }
                .hero-subtitle {
                    margin: 0;
                    max-width: 36rem;
                    font-size: 1.125rem;
                    line-height: 1.625;
                    color: var(--gray-600);
                }
                .hero-cta-group {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .cta-primary, .cta-secondary, .cta-light {
                    border-radius: 1rem;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    transition: all 0.2s ease;
                }
                .cta-primary {
                    background: var(--blue-500);
                    color: white;
                    box-shadow: 0 10px 15px rgba(59, 130, 246, 0.25);
                }
                .cta-primary:hover {
                    background: var(--blue-600);
                    box-shadow: 0 20px 25px rgba(59, 130, 246, 0.3);
                }
                .cta-secondary {
                    border: 1px solid var(--gray-200);
                    background: white;
                    color: var(--gray-700);
                }
                .cta-secondary:hover {
                    border-color: var(--gray-300);
                    background: var(--gray-50);
                }
                .cta-light {
                    padding: 1.25rem 2.5rem;
                    font-weight: 700;
                    background: white;
                    color: var(--gray-900);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .cta-light:hover {
                    background: var(--gray-100);
                }
                .cta-primary:active, .cta-secondary:active, .cta-light:active {
                    transform: scale(0.98);
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 3rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: var(--gray-400);
                }
                .scroll-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, var(--gray-300), transparent);
                }
                .section {
                    position: relative;
                    display: flex;
                    min-height: 100vh;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 8rem 1.5rem;
                }
                .section.compact {
                    min-height: 0;
                }
                .section.cta {
                    padding: 10rem 1.5rem;
                }
                .section.dark {
                    background: var(--gray-900);
                    color: white;
                }
                .section.muted {
                    background: var(--gray-50);
                }
                .section-body {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    width: 100%;
                    max-width: 56rem;
                    margin: 0 auto;
                    flex-direction: column;
                    align-items: center;
                    gap: 4rem;
                    text-align: center;
                }
                .cta-body {
                    max-width: 48rem;
                    gap: 2rem;
                }
                .section-heading {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .section h2 {
                    margin: 0;
                    font-size: 2.25rem;
                    font-weight: 700;
                    line-height: 1.25;
                }
                .eyebrow {
                    font-size: 1rem;
                    font-weight: 600;
                    letter-spacing: 0.025em;
                    color: var(--blue-500);
                }
                .eyebrow.violet {
                    color: var(--gradient-end);
                }
                .accent-red {
                    color: var(--red-500);
                }
                .lead {
                    margin: 0 auto;
                    max-width: 42rem;
                    font-size: 1.125rem;
                    line-height: 1.625;
                    color: var(--gray-600);
                }
                .dark .lead {
                    color: var(--gray-400);
                }
                .wide-only {
                    display: none;
                }
                .grid {
                    display: grid;
                    width: 100%;
                    gap: 1.5rem;
                }
                .grid.narrow {
                    max-width: 48rem;
                }
                .card-icon {
                    font-size: 2.25rem;
                }
                .card-icon.large {
                    font-size: 3rem;
                }
                .problem-card, .audience-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--gray-100);
                    padding: 2rem;
                    transition: all 0.3s ease;
                }
                .problem-card {
                    background: var(--gray-50);
                }
                .problem-card:hover {
                    border-color: var(--gray-200);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .audience-card {
                    gap: 1.25rem;
                    background: white;
                }
                .audience-card:hover {
                    border-color: rgba(49, 130, 246, 0.2);
                    box-shadow: 0 20px 25px rgba(59, 130, 246, 0.05);
                }
                .problem-card h3, .audience-card h3, .feature-card h3 {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 700;
                }
                .audience-card h3, .feature-card h3 {
                    font-size: 1.25rem;
                }
                .problem-card p, .audience-card p, .feature-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    color: var(--gray-500);
                }
                .tag {
                    border-radius: 9999px;
                    background: rgba(49, 130, 246, 0.1);
                    padding: 0.375rem 1rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: var(--blue-500);
                }
                .feature-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 1rem;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 2rem;
                    text-align: left;
                    backdrop-filter: blur(4px);
                    transition: all 0.3s ease;
                }
                .feature-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                }
                .feature-card > *:not(.feature-glow) {
                    position: relative;
                }
                .feature-card p {
                    color: var(--gray-400);
                }
                .feature-glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .feature-card:hover .feature-glow {
                    opacity: 1;
                }
                .steps {
                    display: flex;
                    width: 100%;
                    max-width: 42rem;
                    flex-direction: column;
                }
                .step {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                    padding: 1.5rem 0;
                }
                .step-marker {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .step-number {
                    display: flex;
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: linear-gradient(to bottom right, var(--gradient-start), var(--gradient-end));
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: white;
                    box-shadow: 0 10px 15px rgba(59, 130, 246, 0.2);
                }
                .step-line {
                    margin-top: 0.5rem;
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, var(--blue-500), transparent);
                    opacity: 0.3;
                }
                .step-text {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding-top: 0.25rem;
                    text-align: left;
                }
                .step-text h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .step-text p {
                    margin: 0;
                    font-size: 1rem;
                    color: var(--gray-500);
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }
                .stat-value {
                    font-size: 3rem;
                    font-weight: 900;
                    color: var(--blue-500);
                }
                .stat-label {
                    font-size: 1rem;
                    color: var(--gray-500);
                }
                .cta h2 {
                    font-size: 2.25rem;
                }
                @media (min-width: 640px) {
                    .hero-title { font-size: 3.75rem; }
                    .hero-subtitle { font-size: 1.25rem; }
                    .hero-cta-group { flex-direction: row; }
                    .section h2 { font-size: 3rem; }
                    .wide-only { display: block; }
                    .grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                    .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
                    .stat-value { font-size: 3.75rem; }
                }
                @media (min-width: 1024px) {
                    .hero-title { font-size: 4.5rem; }
                    .cta h2 { font-size: 3.75rem; }
                }
                "#}
            </style>
        </div>
    }
}
