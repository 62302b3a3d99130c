//! Service description and the parameter bag it is resolved from.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The four values that fully determine a rendered unit file.
///
/// Fields are embedded verbatim. Nothing here is validated: a name that is
/// not filesystem-safe surfaces later as a write failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceSpec {
    pub name: String,
    pub description: String,
    pub exec_start: String,
    pub restart: String,
}

impl ServiceSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        exec_start: impl Into<String>,
        restart: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exec_start: exec_start.into(),
            restart: restart.into(),
        }
    }

    /// Base name of the unit file, `<name>.service`.
    ///
    /// An empty name yields `.service`.
    pub fn file_name(&self) -> String {
        format!("{}.service", self.name)
    }

    /// Where the unit is written inside `dir`.
    ///
    /// Only the normal components of [`Self::file_name`] are appended, so
    /// root, prefix and `..` components of the name cannot leave `dir`. A
    /// name with separators lands in a subdirectory that must already exist.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        let file_name = self.file_name();
        let mut path = dir.to_path_buf();
        path.extend(
            Path::new(&file_name)
                .components()
                .filter(|c| matches!(c, Component::Normal(_))),
        );
        path
    }

    /// Last path component of [`Self::file_name`]; the name the unit keeps
    /// once relocated.
    pub fn base_name(&self) -> String {
        let file_name = self.file_name();
        match Path::new(&file_name).file_name() {
            Some(base) => base.to_string_lossy().into_owned(),
            None => file_name,
        }
    }
}

/// How absent keys in a [`ServiceParams`] bag are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Every key must be present. Empty strings are still accepted.
    #[default]
    Strict,
    /// Absent keys become empty strings.
    Lenient,
}

/// Untyped parameter bag as supplied by a caller.
///
/// Key names match the documented interface exactly (`ExecStart`,
/// `Restart`, `tmp`, `location`), so a JSON document can be deserialized
/// straight into it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "ExecStart", default, skip_serializing_if = "Option::is_none")]
    pub exec_start: Option<String>,
    #[serde(rename = "Restart", default, skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ServiceParams {
    /// Overlay `other` on top of `self`: every key present in `other` wins.
    pub fn merge(self, other: ServiceParams) -> Self {
        Self {
            name: other.name.or(self.name),
            description: other.description.or(self.description),
            exec_start: other.exec_start.or(self.exec_start),
            restart: other.restart.or(self.restart),
            tmp: other.tmp.or(self.tmp),
            location: other.location.or(self.location),
        }
    }

    /// Fill `tmp` and `location` only where they are still absent.
    pub fn with_default_dirs(mut self, tmp: Option<String>, location: Option<String>) -> Self {
        self.tmp = self.tmp.or(tmp);
        self.location = self.location.or(location);
        self
    }

    /// Turn the bag into a typed [`InstallPlan`].
    ///
    /// Keys are checked in interface order, so the first missing key is the
    /// one reported.
    pub fn resolve(self, policy: FieldPolicy) -> Result<InstallPlan, DomainError> {
        let take = |value: Option<String>, field: &'static str| match (value, policy) {
            (Some(v), _) => Ok(v),
            (None, FieldPolicy::Lenient) => Ok(String::new()),
            (None, FieldPolicy::Strict) => Err(DomainError::MissingRequiredField { field }),
        };

        let name = take(self.name, "name")?;
        let description = take(self.description, "description")?;
        let exec_start = take(self.exec_start, "ExecStart")?;
        let restart = take(self.restart, "Restart")?;
        let tmp = take(self.tmp, "tmp")?;
        let location = take(self.location, "location")?;

        Ok(InstallPlan {
            spec: ServiceSpec::new(name, description, exec_start, restart),
            staging_dir: PathBuf::from(tmp),
            location: PathBuf::from(location),
        })
    }
}

/// A fully resolved request: what to render, where to stage it, where it
/// ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub spec: ServiceSpec,
    pub staging_dir: PathBuf,
    pub location: PathBuf,
}

impl InstallPlan {
    /// Path the unit file is written to before relocation.
    pub fn staged_path(&self) -> PathBuf {
        self.spec.path_in(&self.staging_dir)
    }

    /// Path the unit file will occupy once relocated.
    pub fn final_path(&self) -> PathBuf {
        self.location.join(self.spec.base_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_bag() -> ServiceParams {
        ServiceParams {
            name: Some("myapp".into()),
            description: Some("My App".into()),
            exec_start: Some("/usr/bin/myapp".into()),
            restart: Some("always".into()),
            tmp: Some("/tmp".into()),
            location: Some("/etc/systemd/system".into()),
        }
    }

    #[test]
    fn file_name_appends_service_suffix() {
        let spec = ServiceSpec::new("myapp", "", "", "");
        assert_eq!(spec.file_name(), "myapp.service");
    }

    #[test]
    fn empty_name_yields_bare_suffix() {
        assert_eq!(ServiceSpec::default().file_name(), ".service");
    }

    #[test]
    fn absolute_name_stays_under_directory() {
        let spec = ServiceSpec::new("/etc/cron.d/x", "", "", "");
        assert_eq!(
            spec.path_in(Path::new("/tmp")),
            PathBuf::from("/tmp/etc/cron.d/x.service")
        );
        assert_eq!(spec.base_name(), "x.service");
    }

    #[test]
    fn parent_components_are_dropped() {
        let spec = ServiceSpec::new("../../x", "", "", "");
        assert_eq!(
            spec.path_in(Path::new("/tmp/stage")),
            PathBuf::from("/tmp/stage/x.service")
        );
    }

    #[test]
    fn final_path_uses_base_name_of_staged_file() {
        let plan = ServiceParams {
            name: Some("sub/x".into()),
            ..full_bag()
        }
        .resolve(FieldPolicy::Strict)
        .unwrap();

        assert_eq!(plan.staged_path(), PathBuf::from("/tmp/sub/x.service"));
        assert_eq!(
            plan.final_path(),
            PathBuf::from("/etc/systemd/system/x.service")
        );
        assert_eq!(
            plan.final_path().file_name(),
            plan.staged_path().file_name()
        );
    }

    #[test]
    fn strict_resolves_complete_bag() {
        let plan = full_bag().resolve(FieldPolicy::Strict).unwrap();
        assert_eq!(plan.spec.exec_start, "/usr/bin/myapp");
        assert_eq!(plan.staging_dir, PathBuf::from("/tmp"));
        assert_eq!(
            plan.final_path(),
            PathBuf::from("/etc/systemd/system/myapp.service")
        );
    }

    #[test]
    fn strict_rejects_first_missing_key() {
        let bag = ServiceParams {
            exec_start: None,
            restart: None,
            ..full_bag()
        };
        assert_eq!(
            bag.resolve(FieldPolicy::Strict).unwrap_err(),
            DomainError::MissingRequiredField { field: "ExecStart" }
        );
    }

    #[test]
    fn strict_accepts_explicit_empty_name() {
        let bag = ServiceParams {
            name: Some(String::new()),
            ..full_bag()
        };
        let plan = bag.resolve(FieldPolicy::Strict).unwrap();
        assert_eq!(plan.spec.file_name(), ".service");
    }

    #[test]
    fn lenient_defaults_missing_keys_to_empty() {
        let plan = ServiceParams::default()
            .resolve(FieldPolicy::Lenient)
            .unwrap();
        assert_eq!(plan.spec, ServiceSpec::default());
        assert_eq!(plan.staging_dir, PathBuf::new());
        assert_eq!(plan.final_path(), PathBuf::from(".service"));
    }

    #[test]
    fn merge_prefers_overlay_values() {
        let base = full_bag();
        let overlay = ServiceParams {
            restart: Some("on-failure".into()),
            ..ServiceParams::default()
        };
        let merged = base.merge(overlay);
        assert_eq!(merged.restart.as_deref(), Some("on-failure"));
        assert_eq!(merged.name.as_deref(), Some("myapp"));
    }

    #[test]
    fn default_dirs_do_not_override_supplied_ones() {
        let bag = ServiceParams {
            tmp: None,
            ..full_bag()
        }
        .with_default_dirs(Some("/var/tmp".into()), Some("/opt/units".into()));
        assert_eq!(bag.tmp.as_deref(), Some("/var/tmp"));
        assert_eq!(bag.location.as_deref(), Some("/etc/systemd/system"));
    }
}
