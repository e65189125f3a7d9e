use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::gallery_reveal::GalleryReveal;
use crate::sections::about::About;
use crate::sections::before_after::BeforeAfter;
use crate::sections::contact::Contact;
use crate::sections::hero::Hero;
use crate::sections::partners::TrustedPartners;
use crate::sections::process_strip::ProcessStrip;
use crate::sections::projects_cta::ProjectsCta;
use crate::sections::services::Services;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount.
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
        <main>
            <Hero />
            <GalleryReveal />
            <ProcessStrip />
            <TrustedPartners />
            <Services />
            <ProjectsCta />
            <BeforeAfter />
            <About />
            <Contact />
            <Footer />
        </main>
    }
}
