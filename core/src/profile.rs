#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub specialization: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub years: &'static str,
    pub current_role: &'static str,
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub skills: &'static [&'static str],
}

impl SkillCategory {
    /// Display title: the key with its first character uppercased.
    pub fn title(&self) -> String {
        capitalize(self.key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub identity: Identity,
    pub experience: Experience,
    pub contact: Contact,
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
}

include!(concat!(env!("OUT_DIR"), "/profile_data.rs"));

impl Profile {
    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|category| category.skills.len()).sum()
    }
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
