// Shared by both pages: palette, base typography, keyframes and the
// reveal transition driven by `components::reveal::Reveal`.
pub const GLOBAL_STYLES: &str = r#"
:root {
    --gray-50: #f9fafb;
    --gray-100: #f2f4f6;
    --gray-200: #e5e8eb;
    --gray-300: #d1d6db;
    --gray-400: #b0b8c1;
    --gray-500: #8b95a1;
    --gray-600: #6b7684;
    --gray-700: #4e5968;
    --gray-800: #333d4b;
    --gray-900: #191f28;
    --blue-500: #3182f6;
    --blue-600: #2272eb;
    --red-500: #f04452;
    --gradient-start: #3182f6;
    --gradient-end: #8b5cf6;
}

* {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    padding: 0;
    background: #ffffff;
    color: var(--gray-900);
    font-family: "Pretendard", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

button {
    font-family: inherit;
    cursor: pointer;
    border: none;
}

.gradient-text {
    background: linear-gradient(to right, var(--gradient-start), var(--gradient-end));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.pre-line {
    white-space: pre-line;
}

@keyframes fade-up {
    from { opacity: 0; transform: translateY(24px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes pulse-slow {
    0%, 100% { transform: scale(1); opacity: 0.06; }
    50% { transform: scale(1.1); opacity: 0.1; }
}

.animate-fade-up {
    animation: fade-up 0.8s ease-out forwards;
}

.animate-fade-in {
    animation: fade-in 1s ease-out forwards;
}

.animate-pulse-slow {
    animation: pulse-slow 6s ease-in-out infinite;
}

.delay-100 { animation-delay: 0.1s; }
.delay-200 { animation-delay: 0.2s; }
.delay-300 { animation-delay: 0.3s; }
.delay-500 { animation-delay: 0.5s; }
.delay-800 { animation-delay: 0.8s; }

.reveal {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 1s ease, transform 1s ease;
}

.reveal.visible {
    opacity: 1;
    transform: translateY(0);
}
"#;
