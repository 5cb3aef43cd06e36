// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Runtime credentials for downstream OpenWhisk tooling.

use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::constants::whisk;
use crate::error::{NuvctlError, Result};

/// `~/.nuvolaris`, created on first use
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(NuvctlError::HomeDirNotFound)?;
    let dir = home.join(".nuvolaris");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write `content` under `dir` with owner-only permissions and return the
/// full path.
pub fn write_owner_only(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(&path)?;
    file.write_all(content)?;
    Ok(path)
}

/// Write the `.wskprops` credentials file and point `WSK_CONFIG_FILE` at it
/// so downstream tooling picks it up. The credentials are the fixed ones the
/// devcluster deployment is provisioned with, not live cluster state.
pub fn write_properties_file() -> Result<PathBuf> {
    let dir = get_or_create_config_dir()?;
    write_properties_file_in(&dir)
}

pub fn write_properties_file_in(dir: &Path) -> Result<PathBuf> {
    let content = format!("AUTH={}\nAPIHOST={}", whisk::AUTH, whisk::APIHOST);
    let path = write_owner_only(dir, whisk::PROPS_FILE, content.as_bytes())?;
    std::env::set_var(whisk::CONFIG_FILE_ENV, &path);
    Ok(path)
}
