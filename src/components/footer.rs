//! Contact footer for the public pages.

use leptos::prelude::*;

/// Footer with call and email contact actions.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__text">
                    <h3>"Need Assistance?"</h3>
                    <p>"Contact us for event details, hotel inquiries, or booking support."</p>
                </div>
                <div class="footer__actions">
                    <a class="btn btn--primary" href="tel:+94112345678">
                        "📞 Call Us"
                    </a>
                    <a class="btn" href="mailto:info@srilankaevents.lk">
                        "✉ Email Us"
                    </a>
                </div>
            </div>
        </footer>
    }
}
