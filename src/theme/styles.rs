//! Global CSS for the estate site.
//!
//! Colors come from the `:root` variables emitted by [`super::colors`].

pub const GLOBAL_STYLES: &str = r#"
/* === Tokens === */
:root {
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;

  --radius: 12px;
  --shadow: 0 10px 30px rgba(27, 31, 36, 0.08);
  --slide: transform 500ms ease-in-out;
  --transition-fast: 150ms ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ivory);
  color: var(--ink);
  line-height: 1.6;
}

img {
  max-width: 100%;
  display: block;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Sections === */
.landing {
  display: flex;
  flex-direction: column;
}

.section {
  padding: 4rem 1.5rem;
  max-width: 1200px;
  margin: 0 auto;
  width: 100%;
}

.section-heading {
  text-align: center;
  margin-bottom: 2.5rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--ink);
}

.section-subtitle {
  margin-top: 0.5rem;
  color: var(--ink-soft);
}

.section-bar {
  width: 80px;
  height: 3px;
  margin: 1rem auto 0;
  background: linear-gradient(90deg, var(--gold), var(--gold-deep));
  border-radius: 2px;
}

/* === Status panels === */
.status-panel {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  min-height: 160px;
}

.status-panel--error {
  color: var(--danger);
}

.loading-spinner {
  width: 40px;
  height: 40px;
  border: 3px solid var(--gold-soft);
  border-top-color: var(--gold);
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.startup-error {
  padding: 4rem;
  text-align: center;
  color: var(--danger);
}

/* === Buttons === */
.btn-primary,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.75rem;
  border-radius: 999px;
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  transition: var(--transition-fast);
}

.btn-primary {
  background: linear-gradient(135deg, var(--gold), var(--gold-deep));
  color: var(--white);
  border: none;
}

.btn-primary:hover:not(:disabled) {
  filter: brightness(1.05);
  box-shadow: var(--shadow);
}

.btn-ghost {
  background: transparent;
  color: var(--gold-deep);
  border: 1px solid var(--gold);
}

.btn-ghost:hover {
  background: var(--gold-soft);
}

.btn-primary:disabled,
.btn-ghost:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-round {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--white);
  color: var(--ink);
  font-size: var(--text-xl);
  line-height: 1;
  cursor: pointer;
  box-shadow: var(--shadow);
}

.btn-round:hover {
  background: var(--gold);
  color: var(--white);
}

.close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  background: none;
  border: none;
  font-size: var(--text-xl);
  cursor: pointer;
  color: var(--ink-soft);
}

/* === Carousel === */
.carousel {
  position: relative;
  display: flex;
  align-items: center;
  gap: 1rem;
}

.carousel-viewport {
  overflow: hidden;
  flex: 1;
}

.carousel-track {
  display: flex;
  transition: var(--slide);
}

.carousel-track.no-transition {
  transition: none;
}

.carousel-card {
  padding: 0 0.75rem;
}

.carousel-dots {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.carousel-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  border: none;
  background: var(--border);
  cursor: pointer;
}

.carousel-dot.active {
  background: var(--gold);
  width: 24px;
  border-radius: 5px;
}

.advantage-card,
.bank-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  min-height: 160px;
  padding: 1.5rem;
  background: var(--white);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  text-align: center;
}

.advantage-location {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

.advantage-distance {
  color: var(--gold-deep);
  font-weight: 600;
}

.advantage-description {
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

.bank-logo {
  max-height: 60px;
  object-fit: contain;
}

/* === Grids and cards === */
.amenities-grid,
.price-grid,
.layout-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.amenity-card,
.price-card,
.layout-card {
  background: var(--white);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
  box-shadow: var(--shadow);
  text-align: center;
}

.layout-card--clickable {
  cursor: pointer;
  font: inherit;
  color: inherit;
}

.amenity-photo,
.layout-image {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  border-radius: calc(var(--radius) - 4px);
  margin-bottom: 1rem;
}

.layout-image--empty {
  background: var(--gold-soft);
}

.amenity-updated,
.layout-meta,
.price-tower {
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.price-type,
.layout-name,
.amenity-name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

.price-amount {
  margin: 0.75rem 0 1rem;
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--gold-deep);
}

/* === Property details === */
.property-hero {
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  gap: 2rem;
  align-items: center;
  margin-bottom: 2rem;
}

.property-image {
  border-radius: var(--radius);
}

.property-title h1 {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
}

.property-price {
  color: var(--gold-deep);
  font-size: var(--text-xl);
  font-weight: 700;
}

.tab-bar {
  display: flex;
  gap: 0.5rem;
  border-bottom: 1px solid var(--border);
  margin-bottom: 1.5rem;
}

.tab {
  padding: 0.75rem 1.25rem;
  background: none;
  border: none;
  border-bottom: 3px solid transparent;
  font: inherit;
  cursor: pointer;
  color: var(--ink-soft);
}

.tab.active {
  color: var(--ink);
  border-bottom-color: var(--gold);
}

.info-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.info-row dt {
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.info-row dd {
  font-weight: 600;
}

.rich-text p + p {
  margin-top: 0.75rem;
}

.map-frame iframe {
  width: 100%;
  min-height: 400px;
  border: 0;
  border-radius: var(--radius);
}

/* === FAQ === */
.faq-list {
  max-width: 800px;
  margin: 0 auto;
}

.faq-item {
  border-bottom: 1px solid var(--border);
}

.faq-question {
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.25rem 0;
  background: none;
  border: none;
  font: inherit;
  font-weight: 600;
  text-align: left;
  cursor: pointer;
}

.faq-toggle {
  color: var(--gold);
  font-size: var(--text-lg);
}

.faq-answer {
  padding-bottom: 1.25rem;
  color: var(--ink-soft);
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(27, 31, 36, 0.6);
  z-index: 100;
}

.modal {
  position: relative;
  width: min(640px, 92vw);
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--white);
  border-radius: var(--radius);
}

/* === Contact form === */
.contact-form {
  max-width: 720px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-soft);
}

.input-field {
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font: inherit;
  background: var(--white);
}

.input-field:focus {
  outline: none;
  border-color: var(--gold);
  box-shadow: 0 0 0 3px var(--gold-soft);
}

.input-field--error {
  border-color: var(--danger);
}

.textarea {
  resize: vertical;
}

.field-error {
  display: flex;
  align-items: center;
  gap: 0.35rem;
  font-size: var(--text-sm);
  color: var(--danger);
}

.field-error__icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--danger);
  color: var(--white);
  font-size: 0.7rem;
}

.form-status {
  text-align: center;
  color: var(--ink-soft);
}

.form-status--success {
  color: var(--success);
}

.form-status--error {
  color: var(--danger);
}

/* === Footer === */
.site-footer {
  padding: 3rem 1.5rem;
  background: var(--ink);
  color: var(--ivory);
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  align-items: center;
}

.site-footer--loading {
  min-height: 120px;
}

.footer-social {
  display: flex;
  gap: 0.75rem;
}

.social-link {
  width: 40px;
  height: 40px;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: 1px solid var(--gold);
  border-radius: 50%;
  color: var(--gold);
  font-weight: 700;
}

.social-link:hover {
  background: var(--gold);
  color: var(--ink);
}

.footer-phone {
  color: var(--gold);
  font-weight: 600;
}

.footer-disclaimer,
.footer-rera,
.footer-copyright,
.footer-error {
  max-width: 900px;
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

/* === Floating menu === */
.floating-menu {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: 0.75rem;
  z-index: 90;
}

.floating-toggle {
  width: 56px;
  height: 56px;
  border-radius: 50%;
  border: none;
  background: linear-gradient(135deg, var(--gold), var(--gold-deep));
  color: var(--white);
  font-size: var(--text-xl);
  cursor: pointer;
  box-shadow: var(--shadow);
}

.floating-action {
  padding: 0.6rem 1.1rem;
  border-radius: 999px;
  background: var(--white);
  box-shadow: var(--shadow);
  font-weight: 600;
}

.floating-action--whatsapp {
  background: var(--whatsapp);
  color: var(--white);
}

/* === Responsive === */
@media (max-width: 1023px) {
  .property-hero {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 639px) {
  .section {
    padding: 3rem 1rem;
  }

  .form-row {
    grid-template-columns: 1fr;
  }

  .section-title {
    font-size: var(--text-xl);
  }
}
"#;
