//! Hook command - installs and manages git pre-commit hooks.
//!
//! The installed hook runs `dct scan --staged`: zero findings allow the
//! commit, one or more block it with each finding rendered as
//! `file:line -> type`.

use std::path::Path;

use anyhow::Context;

use crate::HookCommand;
use crate::git;
use crate::ui::{colors, exit, indicators, print_command_header, print_hint, print_info};

/// Path to the git pre-commit hook file.
pub const PRECOMMIT_HOOK_PATH: &str = ".git/hooks/pre-commit";

/// Marker comment identifying hooks managed by dct.
pub const DCT_HOOK_MARKER: &str = "# dct-managed";

/// Shell script template for the dct-managed pre-commit hook.
pub const HOOK_SCRIPT: &str = r"#!/bin/sh
# dct-managed
set -e
dct scan --staged
";

/// Executes the `dct hook` command, showing status or installing/uninstalling
/// the git pre-commit hook.
pub fn run(command: Option<&HookCommand>) -> super::Result {
    let hook_path = Path::new(PRECOMMIT_HOOK_PATH);

    match command {
        Some(HookCommand::Install) => install(hook_path),
        Some(HookCommand::Uninstall) => uninstall(hook_path),
        None => {
            show_status(hook_path);
            Ok(())
        }
    }
}

fn show_status(hook_path: &Path) {
    print_command_header("hook");

    match check_hook_status(hook_path) {
        HookStatus::NotExists => {
            println!(
                "{} {}",
                colors::muted().apply_to("○"),
                colors::secondary().apply_to("no hook installed")
            );
            println!();
            print_hint("dct hook install", "Install pre-commit hook");
        }
        HookStatus::ManagedByDct => {
            println!(
                "{} {}",
                colors::success().apply_to(indicators::SUCCESS),
                colors::secondary().apply_to("pre-commit installed")
            );
            println!();
            print_hint("dct hook uninstall", "Remove hook");
        }
        HookStatus::ExternalHook => {
            println!(
                "{} {}",
                colors::warning().apply_to(indicators::WARNING),
                colors::secondary().apply_to("external hook (not managed by dct)")
            );
            println!();
            print_info("Add to your pre-commit hook: `dct scan --staged`");
        }
    }
}

fn install(hook_path: &Path) -> super::Result {
    print_command_header("hook install");

    verify_git_repository()?;

    match check_hook_status(hook_path) {
        HookStatus::NotExists => {
            write_hook(hook_path)?;
            print_created(hook_path);
        }
        HookStatus::ManagedByDct => {
            print_already_installed();
        }
        HookStatus::ExternalHook => {
            external_hook_error();
        }
    }

    Ok(())
}

fn uninstall(hook_path: &Path) -> super::Result {
    print_command_header("hook uninstall");

    match check_hook_status(hook_path) {
        HookStatus::NotExists => {
            print_no_hook();
        }
        HookStatus::ManagedByDct => {
            std::fs::remove_file(hook_path).context("removing hook")?;
            print_removed(hook_path);
        }
        HookStatus::ExternalHook => {
            not_managed_error();
        }
    }

    Ok(())
}

fn write_hook(hook_path: &Path) -> anyhow::Result<()> {
    if let Some(hooks_dir) = hook_path.parent() {
        std::fs::create_dir_all(hooks_dir).context("creating hooks directory")?;
    }

    std::fs::write(hook_path, HOOK_SCRIPT).context("writing hook script")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;
        std::fs::set_permissions(hook_path, std::fs::Permissions::from_mode(0o755))
            .context("marking hook executable")?;
    }

    Ok(())
}

fn verify_git_repository() -> anyhow::Result<()> {
    if git::in_repo() {
        return Ok(());
    }

    println!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to("not a git repository")
    );
    std::process::exit(exit::ERROR)
}

fn print_created(hook_path: &Path) {
    println!(
        "{} {}",
        colors::success().apply_to(indicators::ADDED),
        colors::emphasis().apply_to(hook_path.display())
    );
}

fn print_already_installed() {
    println!(
        "{} {}",
        colors::success().apply_to(indicators::SUCCESS),
        colors::secondary().apply_to("pre-commit already installed")
    );
}

fn external_hook_error() -> ! {
    println!(
        "{} {} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to("external hook exists at"),
        colors::emphasis().apply_to(PRECOMMIT_HOOK_PATH)
    );
    println!();
    println!(
        "  {} {}",
        colors::info().apply_to(indicators::INFO),
        colors::secondary().apply_to("Add to your existing hook: `dct scan --staged`")
    );
    println!(
        "  {} {}",
        colors::info().apply_to(indicators::INFO),
        colors::secondary().apply_to("Or remove it first to let dct manage the hook")
    );

    std::process::exit(exit::ERROR)
}

fn print_no_hook() {
    println!(
        "{} {}",
        colors::muted().apply_to("○"),
        colors::secondary().apply_to("no hook installed")
    );
}

fn print_removed(hook_path: &Path) {
    println!(
        "{} {} {}",
        colors::success().apply_to(indicators::SUCCESS),
        colors::secondary().apply_to("removed"),
        colors::emphasis().apply_to(hook_path.display())
    );
}

fn not_managed_error() -> ! {
    println!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to("hook not managed by dct")
    );

    std::process::exit(exit::ERROR)
}

enum HookStatus {
    NotExists,
    ManagedByDct,
    ExternalHook,
}

fn check_hook_status(hook_path: &Path) -> HookStatus {
    if !hook_path.exists() {
        return HookStatus::NotExists;
    }

    let content = std::fs::read_to_string(hook_path).unwrap_or_default();

    if content.contains(DCT_HOOK_MARKER) {
        HookStatus::ManagedByDct
    } else {
        HookStatus::ExternalHook
    }
}
