use chrono::Datelike;
use yew::prelude::*;

use crate::content::{Section, BRAND, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_DISPLAY, SOCIALS};
use crate::utils::scroll::scroll_to_section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer id={Section::Contact.id()} class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">{BRAND}</div>
                        <p>{"Crafting digital experiences with passion and precision. Let's build something amazing together."}</p>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-links">
                            { for Section::ALL.iter().map(|section| {
                                let id = section.id();
                                let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id));
                                html! {
                                    <li key={id}>
                                        <button onclick={onclick}>{section.name()}</button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Contact"}</h3>
                        <ul class="footer-contact">
                            <li><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></li>
                            <li><a href={format!("tel:{}", CONTACT_PHONE)}>{CONTACT_PHONE_DISPLAY}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3>{"Follow Us"}</h3>
                        <div class="footer-socials">
                            { for SOCIALS.iter().map(|social| html! {
                                <a
                                    key={social.name}
                                    href={social.url}
                                    aria-label={social.name}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <svg class="footer-social-icon" fill="currentColor" viewBox="0 0 24 24">
                                        <path d={social.icon} />
                                    </svg>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="footer-copyright">
                    {format!("© {} {}. All rights reserved.", year, BRAND)}
                </div>
            </div>
        </footer>
    }
}
