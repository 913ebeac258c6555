use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ProfileFile {
    identity: IdentityEntry,
    experience: ExperienceEntry,
    contact: ContactEntry,
    skills: Vec<SkillEntry>,
    projects: Vec<ProjectEntry>,
}

#[derive(Deserialize)]
struct IdentityEntry {
    name: String,
    title: String,
    tagline: String,
    specialization: String,
}

#[derive(Deserialize)]
struct ExperienceEntry {
    years: String,
    current_role: String,
    location: String,
}

#[derive(Deserialize)]
struct ContactEntry {
    email: String,
    phone: String,
}

#[derive(Deserialize)]
struct SkillEntry {
    key: String,
    items: Vec<String>,
}

#[derive(Deserialize)]
struct ProjectEntry {
    name: String,
    description: String,
    technologies: Vec<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=FOLIO_PROFILE_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let profile_path = resolve_profile_path(workspace_root);
    println!("cargo:rerun-if-changed={}", profile_path.display());

    let contents = fs::read_to_string(&profile_path).unwrap_or_else(|err| {
        panic!(
            "failed to read profile at {}: {err}",
            profile_path.display()
        )
    });

    let profile: ProfileFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse profile at {}: {err}",
            profile_path.display()
        )
    });

    validate_profile(&profile, &profile_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const PROFILE: Profile = Profile {{").unwrap();
    writeln!(&mut output, "    identity: Identity {{").unwrap();
    writeln!(&mut output, "        name: {},", rust_string(&profile.identity.name)).unwrap();
    writeln!(&mut output, "        title: {},", rust_string(&profile.identity.title)).unwrap();
    writeln!(&mut output, "        tagline: {},", rust_string(&profile.identity.tagline)).unwrap();
    writeln!(
        &mut output,
        "        specialization: {},",
        rust_string(&profile.identity.specialization)
    )
    .unwrap();
    writeln!(&mut output, "    }},").unwrap();

    writeln!(&mut output, "    experience: Experience {{").unwrap();
    writeln!(&mut output, "        years: {},", rust_string(&profile.experience.years)).unwrap();
    writeln!(
        &mut output,
        "        current_role: {},",
        rust_string(&profile.experience.current_role)
    )
    .unwrap();
    writeln!(
        &mut output,
        "        location: {},",
        rust_string(&profile.experience.location)
    )
    .unwrap();
    writeln!(&mut output, "    }},").unwrap();

    writeln!(&mut output, "    contact: Contact {{").unwrap();
    writeln!(&mut output, "        email: {},", rust_string(&profile.contact.email)).unwrap();
    writeln!(&mut output, "        phone: {},", rust_string(&profile.contact.phone)).unwrap();
    writeln!(&mut output, "    }},").unwrap();

    writeln!(&mut output, "    skills: &[").unwrap();
    for skill in &profile.skills {
        writeln!(&mut output, "        SkillCategory {{").unwrap();
        writeln!(&mut output, "            key: {},", rust_string(&skill.key)).unwrap();
        writeln!(&mut output, "            skills: {},", rust_str_slice(&skill.items)).unwrap();
        writeln!(&mut output, "        }},").unwrap();
    }
    writeln!(&mut output, "    ],").unwrap();

    writeln!(&mut output, "    projects: &[").unwrap();
    for project in &profile.projects {
        writeln!(&mut output, "        Project {{").unwrap();
        writeln!(&mut output, "            name: {},", rust_string(&project.name)).unwrap();
        writeln!(
            &mut output,
            "            description: {},",
            rust_string(&project.description)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            technologies: {},",
            rust_str_slice(&project.technologies)
        )
        .unwrap();
        writeln!(&mut output, "        }},").unwrap();
    }
    writeln!(&mut output, "    ],").unwrap();
    writeln!(&mut output, "}};").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("profile_data.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_profile_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("FOLIO_PROFILE_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("profile/profile.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_str_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn require_text(value: &str, field: &str, profile_path: &Path) {
    if value.trim().is_empty() {
        panic!("profile {field} cannot be empty in {}", profile_path.display());
    }
}

fn validate_profile(profile: &ProfileFile, profile_path: &Path) {
    require_text(&profile.identity.name, "identity.name", profile_path);
    require_text(&profile.identity.title, "identity.title", profile_path);
    require_text(&profile.experience.years, "experience.years", profile_path);
    require_text(&profile.experience.current_role, "experience.current_role", profile_path);
    require_text(&profile.contact.email, "contact.email", profile_path);

    if profile.skills.is_empty() {
        panic!("profile {} has no skill categories", profile_path.display());
    }

    let mut keys = HashSet::new();
    for skill in &profile.skills {
        require_text(&skill.key, "skill category key", profile_path);
        if !keys.insert(skill.key.to_ascii_lowercase()) {
            panic!(
                "duplicate skill category '{}' in {}",
                skill.key,
                profile_path.display()
            );
        }
        if skill.items.iter().any(|item| item.trim().is_empty()) {
            panic!(
                "skill category '{}' has an empty skill in {}",
                skill.key,
                profile_path.display()
            );
        }
    }

    let mut names = HashSet::new();
    for project in &profile.projects {
        require_text(&project.name, "project name", profile_path);
        if !names.insert(project.name.clone()) {
            panic!(
                "duplicate project '{}' in {}",
                project.name,
                profile_path.display()
            );
        }
        if project.technologies.iter().any(|tech| tech.trim().is_empty()) {
            panic!(
                "project '{}' has an empty technology tag in {}",
                project.name,
                profile_path.display()
            );
        }
    }
}
