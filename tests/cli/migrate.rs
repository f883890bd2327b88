use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const TASKS: &str = r#"import { useToast } from "@/hooks/use-toast";

export function Tasks() {
  const { toast } = useToast();
  const save = useCallback(() => {
    toast({ title: "Saved", description: "Task created" });
  }, [toast]);
  const fail = () => toast({ title: "Error", description: "Failed", variant: "destructive" });
}
"#;

const TASKS_MIGRATED: &str = r#"import { useToast } from "@/hooks/use-toast";

export function Tasks() {
  const { toast } = useToast();
  const save = useCallback(() => {
    showSuccess("Saved", "Task created");
  }, []);
  const fail = () => showError("Error", "Failed");
}
"#;

const APP: &str = r#"import { Toaster } from "@/components/ui/toaster";
import { Router } from "./Router";

export const App = () => (
  <>
    <Toaster />
    <Router />
  </>
);
"#;

fn setup_project() -> Result<CliTest> {
    let test = CliTest::with_file("src/pages/Tasks.tsx", TASKS)?;
    test.write_file("src/App.tsx", APP)?;
    Ok(test)
}

#[test]
fn test_migrate_dry_run() -> Result<()> {
    let test = setup_project()?;

    assert_cmd_snapshot!(test.migrate_command());

    assert_eq!(test.read_file("src/pages/Tasks.tsx")?, TASKS);
    assert_eq!(test.read_file("src/App.tsx")?, APP);
    assert!(!test.root().join("src/pages/Tasks.tsx.bak").exists());

    Ok(())
}

#[test]
fn test_migrate_apply() -> Result<()> {
    let test = setup_project()?;

    assert_cmd_snapshot!(test.migrate_command().arg("--apply"));

    assert_eq!(test.read_file("src/pages/Tasks.tsx")?, TASKS_MIGRATED);
    assert_eq!(test.read_file("src/pages/Tasks.tsx.bak")?, TASKS);
    assert!(!test.read_file("src/App.tsx")?.contains("Toaster"));
    assert_eq!(test.read_file("src/App.tsx.bak")?, APP);

    Ok(())
}

#[test]
fn test_migrate_apply_twice_is_stable() -> Result<()> {
    let test = setup_project()?;
    test.migrate_command()
        .args(["--apply", "--no-backup"])
        .output()?;

    assert_cmd_snapshot!(test.migrate_command().arg("--apply"));

    assert_eq!(test.read_file("src/pages/Tasks.tsx")?, TASKS_MIGRATED);
    assert!(!test.root().join("src/pages/Tasks.tsx.bak").exists());

    Ok(())
}

#[test]
fn test_migrate_no_backup_and_skip_shell() -> Result<()> {
    let test = setup_project()?;

    assert_cmd_snapshot!(
        test.migrate_command()
            .args(["--apply", "--no-backup", "--skip-shell"])
    );

    assert_eq!(test.read_file("src/pages/Tasks.tsx")?, TASKS_MIGRATED);
    assert!(!test.root().join("src/pages/Tasks.tsx.bak").exists());
    assert_eq!(test.read_file("src/App.tsx")?, APP);

    Ok(())
}

#[test]
fn test_migrate_reports_residual_calls() -> Result<()> {
    let test = CliTest::with_file(
        "src/Form.tsx",
        r#"toast({ title: "Sent" });
toast({ title: t("form.error") });
"#,
    )?;

    assert_cmd_snapshot!(test.migrate_command().arg("--apply"));

    assert_eq!(
        test.read_file("src/Form.tsx")?,
        r#"showToast("Sent", "success");
toast({ title: t("form.error") });
"#
    );

    Ok(())
}

#[test]
fn test_migrate_verbose_shows_excerpt() -> Result<()> {
    let test = CliTest::with_file(
        "src/Form.tsx",
        "const a = 1;\n  toast({ ...defaults, title: \"Hi\" });\n",
    )?;

    assert_cmd_snapshot!(test.migrate_command().arg("-v"));

    Ok(())
}

#[test]
fn test_migrate_explicit_files() -> Result<()> {
    let test = setup_project()?;
    test.write_file("src/Other.tsx", r#"toast({ title: "Other" });"#)?;

    assert_cmd_snapshot!(test.migrate_command().args([
        "pages/Tasks.tsx",
        "pages/Missing.tsx",
        "--apply",
        "--skip-shell"
    ]));

    assert_eq!(test.read_file("src/pages/Tasks.tsx")?, TASKS_MIGRATED);
    assert_eq!(test.read_file("src/Other.tsx")?, r#"toast({ title: "Other" });"#);

    Ok(())
}

#[test]
fn test_migrate_with_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".toastswaprc.json",
        r#"{
            "sourceRoot": "frontend",
            "files": ["components/*.tsx"],
            "targets": { "toast": "notify" },
            "backup": false
        }"#,
    )?;
    test.write_file("frontend/components/A.tsx", r#"toast({ title: "A" });"#)?;
    test.write_file("frontend/components/B.ts", r#"toast({ title: "B" });"#)?;

    assert_cmd_snapshot!(test.migrate_command().arg("--apply"));

    assert_eq!(
        test.read_file("frontend/components/A.tsx")?,
        r#"notify("A", "success");"#
    );
    assert_eq!(
        test.read_file("frontend/components/B.ts")?,
        r#"toast({ title: "B" });"#
    );
    assert!(!test.root().join("frontend/components/A.tsx.bak").exists());

    Ok(())
}

#[test]
fn test_migrate_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({ filters => vec![(r"found: .*web", "found: [PROJECT]/web")] }, {
        assert_cmd_snapshot!(test.migrate_command().args(["--source-root", "web", "--apply"]));
    });

    Ok(())
}

#[test]
fn test_migrate_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".toastswaprc.json", r#"{ "callee": "not valid" }"#)?;
    test.write_file("src/A.tsx", "export {};\n")?;

    assert_cmd_snapshot!(test.migrate_command());

    Ok(())
}
