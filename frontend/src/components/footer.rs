use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::animation::{stagger_style, Reveal, STAGGERED, STAGGER_DELAY_MS, STAGGER_STEP_MS};
use crate::pages::content::{BRAND, FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer id="footer" class="site-footer">
            <div class="container">
                <Reveal motions={STAGGERED} class="footer-grid">
                    <div class="footer-brand fx-item" style={stagger_style(0, STAGGER_STEP_MS, STAGGER_DELAY_MS)}>
                        <div class="brand fx-grow">
                            <span class="brand-mark">{"⚡"}</span>
                            <span class="brand-name">{BRAND}</span>
                        </div>
                        <p>{"Streamline your workflow and boost productivity with our intelligent automation platform."}</p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|(name, glyph)| html! {
                                <a href="#" class="social-link fx-grow" title={*name}>{*glyph}</a>
                            }) }
                        </div>
                    </div>
                    { for FOOTER_COLUMNS.iter().enumerate().map(|(index, column)| html! {
                        <div class="footer-column fx-item" style={stagger_style(index + 1, STAGGER_STEP_MS, STAGGER_DELAY_MS)}>
                            <h3>{column.title}</h3>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li class="footer-link"><a href="#">{*link}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </Reveal>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, BRAND)}</p>
                    <div class="legal-links">
                        { for LEGAL_LINKS.iter().map(|item| html! {
                            <a href="#" class="fx-grow">{*item}</a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
