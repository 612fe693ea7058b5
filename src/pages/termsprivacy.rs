use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. Data We Handle"}</h2>
                <p>{"This website is a static information page. It does not create accounts, set tracking cookies, or store any data you enter — there is nothing to enter."}</p>
                <ul>
                    <li>{"Calling our phone line shares your caller ID with us, like any phone call."}</li>
                    <li>{"Emailing us shares whatever you choose to write, like any email."}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How Contact Details Are Used"}</h2>
                <p>{"Phone numbers and email addresses you share when contacting us are used only to connect you with the service providers you asked about. We do not sell contact details or use them for unsolicited marketing."}</p>
            </section>

            <section>
                <h2>{"3. Third-Party Providers"}</h2>
                <p>{"When we refer you to a service provider, that provider handles your information under its own privacy terms. We recommend confirming those terms with the provider directly."}</p>
            </section>

            <section>
                <h2>{"4. Contact"}</h2>
                <p>{"For privacy-related inquiries, contact:"}</p>
                <p>{"Email: "}{ config::CONTACT_EMAIL }</p>
                <p>{"Phone: "}{ config::PHONE_DISPLAY }</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{"Terms of Service"}</h1>
            <p class="company-name">{"Provided by Ghulam Shabeer Services"}</p>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"These Terms of Service (\"Terms\") govern your use of this website and our referral phone line (\"Service\"). By using the Service you agree to be bound by these Terms."}</p>
            </section>

            <section>
                <h2>{"2. What the Service Is"}</h2>
                <p>{"We connect callers with independent, licensed third-party service providers. We are a referral service: we do not perform electrical, appliance, HVAC, roofing, plumbing, locksmith, or pest-control work ourselves."}</p>
            </section>

            <section>
                <h2>{"3. Third-Party Work"}</h2>
                <ul>
                    <li>{"Any work you commission is a contract between you and the provider we connect you with."}</li>
                    <li>{"Pricing, scheduling, warranties, and workmanship are the provider's responsibility."}</li>
                    <li>{"We make reasonable efforts to refer only licensed, reputable providers but make no guarantee about the outcome of their work."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Fees"}</h2>
                <p>{"Calling and being connected through the Service is free. Standard carrier charges for calls and messages may apply."}</p>
            </section>

            <section>
                <h2>{"5. Acceptable Use"}</h2>
                <p>{"You agree not to use the Service for any unlawful purpose or in any way that could harm the Service or impair anyone else's use of it."}</p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>{"Questions about these Terms: "}{ config::CONTACT_EMAIL }</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>
        </div>
    }
}
