use folio_core::profile::{Profile, Project, SkillCategory};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProfileProps {
    pub(crate) profile: &'static Profile,
}

#[function_component(ProfileView)]
pub(crate) fn profile_view(props: &ProfileProps) -> Html {
    let profile = props.profile;
    let identity = &profile.identity;
    let experience = &profile.experience;
    let skills: Html = profile.skills.iter().map(skill_category).collect();
    let projects: Html = profile.projects.iter().map(project_card).collect();
    html! {
        <div class="profile">
            <header class="hero">
                <h1 class="hero-name dynamic-text">{ identity.name }</h1>
                <h2 class="hero-title dynamic-text">{ identity.title }</h2>
                <p class="hero-tagline dynamic-text">{ identity.tagline }</p>
            </header>

            <section id="experience" class="section">
                <h3 class="section-header dynamic-text">{ "Experience" }</h3>
                <div class="experience-card">
                    <p class="dynamic-text">
                        <strong>{ experience.years }</strong>
                        { " years of professional experience" }
                    </p>
                    <p class="dynamic-text">
                        <strong>{ "Current Role:" }</strong>{ " " }{ experience.current_role }
                    </p>
                    <p class="dynamic-text">
                        <strong>{ "Location:" }</strong>{ " " }{ experience.location }
                    </p>
                </div>
            </section>

            <section id="skills" class="section">
                <h3 class="section-header dynamic-text">{ "Technical Skills" }</h3>
                <div class="skills-grid">{ skills }</div>
            </section>

            <section id="projects" class="section">
                <h3 class="section-header dynamic-text">{ "Featured Projects" }</h3>
                { projects }
            </section>

            <footer id="contact" class="contact">
                <p class="contact-item dynamic-text">{ "📧 " }{ profile.contact.email }</p>
                <p class="contact-item dynamic-text">{ "📱 " }{ profile.contact.phone }</p>
            </footer>
        </div>
    }
}

fn skill_category(category: &SkillCategory) -> Html {
    let tags: Html = category
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            html! { <span key={index} class="skill-tag">{ *skill }</span> }
        })
        .collect();
    html! {
        <div key={category.key} class="skill-category">
            <h4 class="category-title dynamic-text">{ category.title() }</h4>
            <div class="skill-tags">{ tags }</div>
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    let badges: Html = project
        .technologies
        .iter()
        .enumerate()
        .map(|(index, tech)| {
            html! { <span key={index} class="tech-badge">{ *tech }</span> }
        })
        .collect();
    html! {
        <div key={project.name} class="project-card">
            <h4 class="project-name dynamic-text">{ project.name }</h4>
            <p class="project-description dynamic-text">{ project.description }</p>
            <div class="tech-stack">{ badges }</div>
        </div>
    }
}
