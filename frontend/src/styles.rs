// Site-wide rules. Page specific styles live next to their components.
pub const BASE_CSS: &str = r#"
:root {
    --accent: #ff6b35;
    --ink: #141414;
    --muted: #6b6b6b;
    --surface: #f6f4f1;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: var(--ink);
    background: #fff;
}

main section {
    padding: 5rem 1.5rem;
    max-width: 1200px;
    margin: 0 auto;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.85rem 1.6rem;
    border: none;
    border-radius: 999px;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    position: relative;
    overflow: hidden;
}

.btn-primary {
    background: var(--accent);
    color: #fff;
}

.btn:disabled {
    opacity: 0.6;
    cursor: default;
}

/* scroll reveal */
[data-animate] {
    opacity: 0;
    transition: opacity 0.7s ease, transform 0.7s ease;
}

[data-animate="fade-up"] {
    transform: translateY(40px);
}

[data-animate="fade-left"] {
    transform: translateX(40px);
}

[data-animate].in-view {
    opacity: 1;
    transform: none;
}

[data-animate-child] {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.5s ease, transform 0.5s ease;
}

[data-animate-child].animate-child-in {
    opacity: 1;
    transform: none;
}

/* hero */
.hero {
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 3rem;
    align-items: center;
    min-height: 90vh;
}

.hero h1 {
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    line-height: 1.05;
    margin: 0.5rem 0 1rem;
}

.hero-kicker,
.hero-trust-label {
    color: var(--muted);
    letter-spacing: 0.08em;
    text-transform: uppercase;
    font-size: 0.8rem;
}

.hero-logos {
    display: flex;
    gap: 1.5rem;
    color: var(--muted);
    font-weight: 700;
}

.hero-visual {
    position: relative;
    min-height: 480px;
}

.hero-diamond-gray {
    position: absolute;
    top: 15%;
    left: 20%;
    width: 260px;
    height: 260px;
    background: #e6e3de;
    border-radius: 32px;
    transform: rotate(45deg);
    transition: filter 0.2s linear;
}

.hero-floating {
    position: absolute;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.6rem 1rem;
    background: #fff;
    border-radius: 14px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
}

.hero-floating--top { top: 4%; right: 12%; }
.hero-floating--right { top: 45%; right: 0; }
.hero-floating--bottom { bottom: 6%; left: 6%; }

.hero-card {
    position: relative;
    margin: 3rem auto 0;
    width: 300px;
    padding: 1rem;
    background: #fff;
    border-radius: 20px;
    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.12);
}

.hero-card-profile-image {
    width: 100%;
    border-radius: 14px;
}

.creator-tags,
.creator-stat-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.4rem;
    font-size: 0.8rem;
}

.tag-item,
.creator-pill {
    background: var(--surface);
    border-radius: 999px;
    padding: 0.2rem 0.6rem;
}

/* grids */
.use-grid,
.features-grid,
.service-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}

.use-card,
.feature-item,
.service-card,
.about-stat-card {
    position: relative;
    padding: 1.5rem;
    background: var(--surface);
    border-radius: 18px;
    transition: transform 0.25s ease, box-shadow 0.25s ease;
}

.card-hover-effect:hover,
.feature-hover-effect:hover {
    transform: translateY(-4px);
    box-shadow: 0 14px 30px rgba(0, 0, 0, 0.08);
}

.feature-number {
    position: absolute;
    top: 1rem;
    right: 1.25rem;
    color: var(--accent);
    font-weight: 700;
}

.integration-row,
.stats-row {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}

.integration-item {
    padding: 0.6rem 1.2rem;
    border: 1px solid #e3e3e3;
    border-radius: 999px;
}

.stat-number {
    font-size: 2.5rem;
    font-weight: 800;
}

.cta {
    text-align: center;
}

/* decorative motion. `translate` and `scale` are used where an inline
   transform from the parallax hook must keep applying. */
.hero-text-reveal {
    display: inline-block;
    animation: text-reveal 0.8s ease both;
}

@keyframes text-reveal {
    from { clip-path: inset(0 100% 0 0); translate: 0 12px; }
    to { clip-path: inset(0 0 0 0); translate: 0 0; }
}

.animate-bounce-in {
    animation: bounce-in 0.7s cubic-bezier(0.34, 1.56, 0.64, 1) 0.4s both;
}

@keyframes bounce-in {
    0% { scale: 0.6; }
    70% { scale: 1.05; }
    100% { scale: 1; }
}

.btn-shine {
    position: absolute;
    inset: 0;
    background: linear-gradient(120deg, transparent 30%, rgba(255, 255, 255, 0.45) 50%, transparent 70%);
    translate: -100% 0;
    animation: shine 3s ease-in-out infinite;
    pointer-events: none;
}

@keyframes shine {
    0%, 60% { translate: -100% 0; }
    100% { translate: 100% 0; }
}

.btn-arrow {
    display: inline-block;
    transition: translate 0.2s ease;
}

.btn:hover .btn-arrow {
    translate: 4px 0;
}

.animate-float {
    animation: float 4s ease-in-out infinite;
}

.hero-floating--right.animate-float { animation-delay: 1s; }
.hero-floating--bottom.animate-float { animation-delay: 2s; }

@keyframes float {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 -10px; }
}

.hero-card-delayed {
    animation: card-settle 0.8s ease both;
}

@keyframes card-settle {
    from { scale: 0.94; }
    to { scale: 1; }
}

.animate-card-hover {
    transition: translate 0.3s ease, box-shadow 0.3s ease;
}

.animate-card-hover:hover {
    translate: 0 -6px;
    box-shadow: 0 28px 60px rgba(0, 0, 0, 0.16);
}

.avatar {
    width: 44px;
    height: 44px;
    border-radius: 50%;
    background: linear-gradient(135deg, var(--accent), #ffb199);
}

.animate-pulse-slow {
    animation: pulse-slow 3s ease-in-out infinite;
}

@keyframes pulse-slow {
    0%, 100% { opacity: 1; scale: 1; }
    50% { opacity: 0.75; scale: 0.94; }
}

.animate-typing {
    display: inline-block;
    overflow: hidden;
    white-space: nowrap;
    max-width: 100%;
    animation: typing 2.5s steps(34, end) 1s both;
}

@keyframes typing {
    from { max-width: 0; }
    to { max-width: 100%; }
}

.card-glow {
    position: absolute;
    inset: 0;
    border-radius: inherit;
    background: radial-gradient(circle at 30% 0%, rgba(255, 107, 53, 0.18), transparent 60%);
    opacity: 0;
    transition: opacity 0.3s ease;
    pointer-events: none;
}

.use-card:hover .card-glow {
    opacity: 1;
}

.animate-count {
    opacity: 0;
}

.in-view .animate-count {
    animation: count-in 1.2s ease both;
}

@keyframes count-in {
    from { opacity: 0; translate: 0 16px; }
    to { opacity: 1; translate: 0 0; }
}

.animate-gradient-shift {
    background: linear-gradient(120deg, #fff1ea, #f6f4f1, #ffe2d4);
    background-size: 200% 200%;
    border-radius: 28px;
    animation: gradient-shift 8s ease infinite;
}

@keyframes gradient-shift {
    0%, 100% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
}

/* footer */
.footer {
    background: var(--ink);
    color: #fff;
    padding: 4rem 1.5rem 2rem;
}

.footer-top {
    display: flex;
    flex-wrap: wrap;
    gap: 3rem;
    max-width: 1200px;
    margin: 0 auto;
}

.footer-columns {
    display: flex;
    flex-wrap: wrap;
    gap: 2.5rem;
}

.footer-col {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}

.footer-link {
    color: #bdbdbd;
    text-decoration: none;
}

.footer-bottom {
    max-width: 1200px;
    margin: 3rem auto 0;
    color: #8a8a8a;
    font-size: 0.85rem;
}

.logo-image.small {
    height: 28px;
}

@media (prefers-reduced-motion: reduce) {
    [data-animate],
    [data-animate-child] {
        transition: none;
    }
    .hero-text-reveal,
    .animate-bounce-in,
    .btn-shine,
    .animate-float,
    .hero-card-delayed,
    .animate-pulse-slow,
    .animate-typing,
    .in-view .animate-count,
    .animate-gradient-shift {
        animation: none;
    }
}

@media (max-width: 900px) {
    .hero {
        grid-template-columns: 1fr;
    }
}
"#;
