//! CSS for the landing page.
//!
//! Rendered into a `<style>` element by `App`, so the wasm bundle is the
//! whole page. Layout breakpoint is 768px: below it the desktop nav links
//! hide and the mobile toggle shows.

/// Complete stylesheet - blue primary, navy secondary, green call-to-action.
pub const LANDING_CSS: &str = r#"
:root {
  --primary: hsl(213, 94%, 58%);
  --primary-soft: hsl(213, 94%, 68%);
  --secondary: hsl(222, 47%, 18%);
  --success: hsl(142, 71%, 40%);
  --success-hover: hsl(142, 71%, 34%);
  --background: hsl(0, 0%, 100%);
  --foreground: hsl(222, 47%, 11%);
  --muted: hsl(210, 40%, 96%);
  --muted-foreground: hsl(215, 16%, 40%);
  --border: hsl(214, 32%, 91%);
  --radius: 12px;
  --nav-height: 80px;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
  font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
  color: var(--foreground);
  background: var(--background);
  line-height: 1.6;
}

button { font: inherit; cursor: pointer; border: none; background: none; color: inherit; }
a { color: inherit; text-decoration: none; }

.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 16px; }

/* Navigation */
.nav {
  position: fixed; top: 0; left: 0; right: 0; z-index: 50;
  background: hsla(0, 0%, 100%, 0.8);
  backdrop-filter: blur(4px);
  transition: all 0.3s ease;
}
.nav-scrolled {
  background: hsla(0, 0%, 100%, 0.95);
  backdrop-filter: blur(12px);
  box-shadow: 0 4px 12px rgba(15, 23, 42, 0.12);
}
.nav-inner { display: flex; justify-content: space-between; align-items: center; padding: 16px 0; }
.nav-brand { font-size: 1.5rem; font-weight: 700; color: var(--primary); transition: opacity 0.2s; }
.nav-brand:hover { opacity: 0.8; }
.nav-links { display: flex; align-items: center; gap: 32px; }
.nav-link { font-weight: 500; transition: color 0.2s; }
.nav-link:hover { color: var(--primary); }
.nav-toggle { display: none; padding: 8px; font-size: 1.5rem; line-height: 1; }
.nav-mobile {
  display: flex; flex-direction: column; gap: 16px;
  padding: 16px 0; border-top: 1px solid var(--border); background: var(--background);
}
.nav-mobile-link { text-align: left; padding: 8px 16px; transition: color 0.2s; }
.nav-mobile-link:hover { color: var(--primary); }

/* Buttons */
.btn {
  display: inline-block; border-radius: 999px; font-weight: 600;
  transition: all 0.3s ease; color: #fff;
}
.btn-primary { background: var(--primary); padding: 8px 24px; }
.btn-primary:hover { background: hsl(213, 94%, 52%); }
.btn-success { background: var(--success); padding: 12px 28px; }
.btn-success:hover { background: var(--success-hover); transform: translateY(-4px); box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15); }
.btn-lg { padding: 16px 32px; font-size: 1.125rem; }
.btn-block { width: 100%; }

/* Hero */
.hero {
  position: relative; min-height: 100vh; overflow: hidden;
  display: flex; align-items: center; justify-content: center;
}
.hero-backdrop { position: absolute; inset: 0; opacity: 0.9; }
.hero-content { position: relative; z-index: 10; text-align: center; color: #fff; max-width: 900px; }
.hero-title { font-size: 3.75rem; font-weight: 700; line-height: 1.15; margin-bottom: 24px; }
.hero-subtitle { font-size: 1.5rem; opacity: 0.95; margin-bottom: 32px; }

/* Sections */
.section { padding: 80px 0; }
.section-muted { background: hsla(210, 40%, 96%, 0.3); }
.section-header { text-align: center; margin-bottom: 64px; }
.section-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 16px; }
.section-description { font-size: 1.125rem; color: var(--muted-foreground); max-width: 768px; margin: 0 auto; }

.card {
  background: var(--background); border: 1px solid var(--border);
  border-radius: var(--radius); padding: 24px; transition: all 0.3s ease;
}
.card:hover { box-shadow: 0 10px 24px rgba(15, 23, 42, 0.1); }

/* About */
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.about-copy p { font-size: 1.125rem; color: var(--muted-foreground); margin-bottom: 24px; }
.about-heading { font-size: 1.5rem; font-weight: 600; margin-bottom: 16px; }
.stats-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.stat-card { text-align: center; }
.stat-value { font-size: 1.875rem; font-weight: 700; color: var(--primary); margin-bottom: 8px; }
.stat-label { font-size: 0.875rem; color: var(--muted-foreground); }

/* Services */
.services-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 32px; }
.service-card { text-align: center; }
.service-card:hover { transform: translateY(-8px); }
.service-icon {
  width: 80px; height: 80px; margin: 0 auto 24px; border-radius: 50%;
  display: flex; align-items: center; justify-content: center;
  font-size: 2.25rem; color: #fff;
  background: linear-gradient(135deg, var(--primary), var(--primary-soft));
}
.service-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 16px; }
.service-description { color: var(--muted-foreground); }

/* Testimonials */
.testimonials-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; max-width: 900px; margin: 0 auto; }
.testimonial-card { position: relative; padding: 32px; }
.testimonial-mark {
  position: absolute; top: -16px; left: -16px;
  font-size: 3.75rem; font-family: Georgia, serif; color: hsla(213, 94%, 58%, 0.2);
}
.testimonial-quote { position: relative; z-index: 1; font-size: 1.125rem; font-style: italic; margin-bottom: 24px; }
.testimonial-author { display: flex; align-items: center; gap: 16px; }
.avatar {
  width: 48px; height: 48px; border-radius: 50%; flex-shrink: 0;
  display: flex; align-items: center; justify-content: center;
  color: #fff; font-weight: 600;
  background: linear-gradient(135deg, var(--primary), var(--primary-soft));
}
.testimonial-name { font-weight: 600; }
.testimonial-role { font-size: 0.875rem; color: var(--muted-foreground); }

/* Contact */
.section-contact { background: linear-gradient(135deg, var(--secondary), hsl(222, 47%, 24%)); color: #fff; }
.section-contact .section-description { color: hsla(0, 0%, 100%, 0.8); }
.contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: start; }
.contact-info { display: flex; flex-direction: column; gap: 32px; }
.contact-heading { font-size: 1.5rem; font-weight: 600; margin-bottom: 24px; }
.contact-item {
  display: flex; align-items: center; gap: 16px; padding: 16px;
  border-radius: 8px; background: hsla(0, 0%, 100%, 0.1); transition: background 0.2s;
}
.contact-item:hover { background: hsla(0, 0%, 100%, 0.15); }
.contact-icon {
  width: 48px; height: 48px; border-radius: 50%; flex-shrink: 0;
  display: flex; align-items: center; justify-content: center;
  background: var(--primary); font-size: 1.25rem;
}
.contact-label { font-weight: 600; margin-bottom: 4px; }
.contact-link { color: hsla(0, 0%, 100%, 0.9); }
.contact-link:hover { color: #fff; }
.contact-card { background: hsla(0, 0%, 100%, 0.1); border-color: hsla(0, 0%, 100%, 0.2); padding: 32px; color: #fff; }
.contact-form { display: flex; flex-direction: column; gap: 24px; }
.field label { display: block; margin-bottom: 8px; }
.field input, .field textarea {
  width: 100%; padding: 10px 12px; border-radius: 8px; font: inherit;
  border: 1px solid hsla(0, 0%, 100%, 0.2); background: hsla(0, 0%, 100%, 0.9); color: #111827;
}
.field textarea { resize: none; }

/* Footer */
.footer { background: var(--secondary); color: #fff; padding: 32px 0; text-align: center; }
.footer-copyright { color: hsla(0, 0%, 100%, 0.8); }

/* Toasts */
.toast-viewport {
  position: fixed; bottom: 0; right: 0; z-index: 100;
  display: flex; flex-direction: column-reverse; gap: 8px;
  padding: 16px; max-width: 420px; width: 100%; list-style: none;
}
.toast {
  display: flex; justify-content: space-between; align-items: flex-start; gap: 16px;
  padding: 16px 20px; border-radius: 8px; border: 1px solid var(--border);
  background: var(--background); color: var(--foreground);
  box-shadow: 0 10px 24px rgba(15, 23, 42, 0.18);
  animation: toast-in 0.2s ease-out;
}
.toast-title { font-weight: 600; font-size: 0.875rem; }
.toast-description { font-size: 0.875rem; opacity: 0.9; }
.toast-close { opacity: 0.6; }
.toast-close:hover { opacity: 1; }
@keyframes toast-in { from { transform: translateY(100%); opacity: 0; } to { transform: none; opacity: 1; } }

@media (max-width: 1024px) {
  .services-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .nav-toggle { display: block; }
  .hero-title { font-size: 2.25rem; }
  .hero-subtitle { font-size: 1.25rem; }
  .about-grid, .contact-grid, .testimonials-grid, .services-grid { grid-template-columns: 1fr; }
}

@media (min-width: 769px) {
  .nav-mobile { display: none; }
}

@media (max-width: 640px) {
  .stats-grid { grid-template-columns: 1fr; }
}
"#;
