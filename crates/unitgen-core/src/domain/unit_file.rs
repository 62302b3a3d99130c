//! Fixed-layout systemd unit rendering.

use std::fmt;

use crate::domain::service_spec::ServiceSpec;

/// Install target written into every unit.
pub const WANTED_BY: &str = "multi-user.target";

/// A rendered unit file: its base name and exact byte content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFile {
    pub file_name: String,
    pub content: String,
}

impl UnitFile {
    /// Render `spec` into the fixed `[Unit]` / `[Service]` / `[Install]`
    /// layout. Values are substituted verbatim.
    ///
    /// The last line carries no trailing newline.
    pub fn render(spec: &ServiceSpec) -> Self {
        let content = format!(
            "[Unit]\n\
             Description={}\n\
             \n\
             [Service]\n\
             ExecStart={}\n\
             Restart={}\n\
             \n\
             [Install]\n\
             WantedBy={}",
            spec.description, spec.exec_start, spec.restart, WANTED_BY
        );

        Self {
            file_name: spec.file_name(),
            content,
        }
    }
}

impl fmt::Display for UnitFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_documented_example_exactly() {
        let spec = ServiceSpec::new("myapp", "My App", "/usr/bin/myapp", "always");
        let unit = UnitFile::render(&spec);

        assert_eq!(unit.file_name, "myapp.service");
        assert_eq!(
            unit.content,
            "[Unit]\nDescription=My App\n\n[Service]\nExecStart=/usr/bin/myapp\nRestart=always\n\n[Install]\nWantedBy=multi-user.target"
        );
    }

    #[test]
    fn values_are_embedded_verbatim() {
        // Embedded newlines are not escaped; callers own injection risk.
        let spec = ServiceSpec::new(
            "odd",
            "  spaced  = value ",
            "/bin/sh -c 'echo %i $HOME'",
            "on-failure\nUser=root",
        );
        let unit = UnitFile::render(&spec);

        assert!(unit.content.contains("Description=  spaced  = value \n"));
        assert!(unit.content.contains("ExecStart=/bin/sh -c 'echo %i $HOME'\n"));
        assert!(unit.content.contains("Restart=on-failure\nUser=root\n"));
    }

    #[test]
    fn empty_fields_keep_the_layout() {
        let unit = UnitFile::render(&ServiceSpec::default());
        assert_eq!(unit.file_name, ".service");
        assert_eq!(
            unit.content.lines().collect::<Vec<_>>(),
            vec![
                "[Unit]",
                "Description=",
                "",
                "[Service]",
                "ExecStart=",
                "Restart=",
                "",
                "[Install]",
                "WantedBy=multi-user.target",
            ]
        );
    }

    #[test]
    fn render_is_deterministic() {
        let spec = ServiceSpec::new("a", "b", "c", "d");
        assert_eq!(UnitFile::render(&spec), UnitFile::render(&spec));
        assert_eq!(UnitFile::render(&spec).to_string(), UnitFile::render(&spec).content);
    }
}
