//! Cert command implementation.

use anyhow::Result;
use ranger_config::{CertBundle, CertRole, RangerLoader, load_cert};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::commands::yes_no;
use crate::output::{OutputFormat, Report, aligned_rows, render};

#[derive(Debug, Serialize)]
pub struct CertReport {
    pub dir: PathBuf,
    pub complete: bool,
    /// Role name to whether material was found.
    pub roles: BTreeMap<&'static str, bool>,
}

impl CertReport {
    pub fn from_bundle(bundle: &CertBundle) -> Self {
        Self {
            dir: bundle.dir.clone(),
            complete: bundle.is_complete(),
            roles: CertRole::ALL
                .into_iter()
                .map(|role| (role.as_str(), bundle.has(role)))
                .collect(),
        }
    }
}

impl Report for CertReport {
    fn text(&self) -> String {
        let mut rows = vec![
            ("dir", self.dir.display().to_string()),
            ("complete", yes_no(self.complete)),
        ];
        for role in CertRole::ALL {
            let found = self.roles.get(role.as_str()).copied().unwrap_or(false);
            rows.push((
                role.as_str(),
                if found { "found" } else { "missing" }.to_string(),
            ));
        }
        aligned_rows(rows)
    }
}

pub fn run(loader: &RangerLoader, format: OutputFormat) -> Result<String> {
    let resolver = loader.resolver()?;
    let bundle = load_cert(&resolver);
    render(&CertReport::from_bundle(&bundle), format)
}
