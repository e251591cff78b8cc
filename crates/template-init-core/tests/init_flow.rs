use std::fs;
use std::path::Path;
use template_init_core::{
    marker::marker_path, run_init, ConflictCheck, InitOptions, Outcome, PresetAnswers,
    PresetValues, PromptProvider, TemplateConfig, UserAnswers,
};
use tempfile::TempDir;

/// Prompt provider with canned answers that records what it was asked
struct ScriptedPrompts {
    answers: UserAnswers,
    confirm: bool,
    reinit: bool,
    asked_reinit: bool,
}

impl ScriptedPrompts {
    fn new() -> Self {
        Self {
            answers: UserAnswers::new("Acme Corp", "@acme/ui", "Acme components", "#FF5733"),
            confirm: true,
            reinit: false,
            asked_reinit: false,
        }
    }
}

impl PromptProvider for ScriptedPrompts {
    fn answers(&mut self) -> anyhow::Result<UserAnswers> {
        Ok(self.answers.clone())
    }

    fn confirm(&mut self, _answers: &UserAnswers) -> anyhow::Result<bool> {
        Ok(self.confirm)
    }

    fn confirm_reinit(&mut self, _existing: &ConflictCheck) -> anyhow::Result<bool> {
        self.asked_reinit = true;
        Ok(self.reinit)
    }
}

fn seed_template(root: &Path) {
    fs::write(
        root.join("package.json"),
        "{\n  \"name\": \"@syntek-studio/ui\",\n  \"description\": \"A cross-platform UI component library for React and React Native\",\n  \"author\": \"Syntek Studio\"\n}\n",
    )
    .unwrap();
    fs::write(
        root.join("README.md"),
        "# @syntek-studio/ui\n\nInstall with `npm i @syntek/ui`.\n\nBrand colour: {{PRIMARY_COLOUR}}\n",
    )
    .unwrap();
    fs::create_dir_all(root.join(".claude")).unwrap();
    fs::write(
        root.join(".claude/CLAUDE.md"),
        "Project by Syntek Studio.\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/index.ts"), "export * from './components';\n").unwrap();
}

fn options(root: &Path) -> InitOptions {
    InitOptions {
        root: root.to_path_buf(),
        json: true,
        ..Default::default()
    }
}

fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    ["package.json", "README.md", ".claude/CLAUDE.md", "src/index.ts"]
        .iter()
        .map(|f| (f.to_string(), fs::read(root.join(f)).unwrap()))
        .collect()
}

#[tokio::test]
async fn test_fresh_run_initializes_template() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let mut prompts = ScriptedPrompts::new();

    let report = run_init(&options(temp.path()), &mut prompts).await;

    assert_eq!(report.outcome, Outcome::Completed);
    assert!(report.success);
    assert_eq!(report.verified, Some(true));
    assert_eq!(report.files.len(), 4);
    assert_eq!(report.files_modified, 3);
    assert!(!prompts.asked_reinit);

    let package = fs::read_to_string(temp.path().join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"@acme/ui\""));
    assert!(package.contains("\"description\": \"Acme components\""));
    assert!(package.contains("\"author\": \"Acme Corp\""));

    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_eq!(
        readme,
        "# @acme/ui\n\nInstall with `npm i @acme/ui`.\n\nBrand colour: #FF5733\n"
    );

    let marker: TemplateConfig =
        serde_json::from_str(&fs::read_to_string(marker_path(temp.path())).unwrap()).unwrap();
    assert!(marker.initialized);
    assert_eq!(marker.package_name, "@acme/ui");
    assert_eq!(marker.client_name, "Acme Corp");

    for file in ["package.json", "README.md", ".claude/CLAUDE.md", "src/index.ts"] {
        assert!(!temp.path().join(format!("{}.backup", file)).exists());
    }
}

#[tokio::test]
async fn test_second_run_reports_conflict_without_changes() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    run_init(&options(temp.path()), &mut ScriptedPrompts::new()).await;
    let before = snapshot(temp.path());
    let marker_before = fs::read(marker_path(temp.path())).unwrap();

    let mut prompts = ScriptedPrompts::new();
    prompts.answers = UserAnswers::new("Other", "@other/ui", "Other", "#000");
    let report = run_init(&options(temp.path()), &mut prompts).await;

    assert!(prompts.asked_reinit);
    assert_eq!(report.outcome, Outcome::Conflict);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.existing_package.as_deref(), Some("@acme/ui"));
    assert_eq!(report.existing_client.as_deref(), Some("Acme Corp"));
    assert_eq!(snapshot(temp.path()), before);
    assert_eq!(fs::read(marker_path(temp.path())).unwrap(), marker_before);
}

#[tokio::test]
async fn test_force_reinitializes() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    run_init(&options(temp.path()), &mut ScriptedPrompts::new()).await;

    let mut prompts = ScriptedPrompts::new();
    prompts.answers = UserAnswers::new("Globex", "@globex/ui", "Globex parts", "#123");
    let opts = InitOptions {
        force: true,
        ..options(temp.path())
    };
    let report = run_init(&opts, &mut prompts).await;

    assert!(!prompts.asked_reinit);
    assert_eq!(report.outcome, Outcome::Completed);
    // Placeholders are gone after the first run, so nothing changes
    assert_eq!(report.files_modified, 0);

    let marker: TemplateConfig =
        serde_json::from_str(&fs::read_to_string(marker_path(temp.path())).unwrap()).unwrap();
    assert_eq!(marker.package_name, "@globex/ui");
}

#[tokio::test]
async fn test_confirmed_reinit_proceeds() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    run_init(&options(temp.path()), &mut ScriptedPrompts::new()).await;

    let mut prompts = ScriptedPrompts::new();
    prompts.reinit = true;
    let report = run_init(&options(temp.path()), &mut prompts).await;

    assert!(prompts.asked_reinit);
    assert_eq!(report.outcome, Outcome::Completed);
}

#[tokio::test]
async fn test_cancel_has_no_side_effects() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let before = snapshot(temp.path());

    let mut prompts = ScriptedPrompts::new();
    prompts.confirm = false;
    let report = run_init(&options(temp.path()), &mut prompts).await;

    assert_eq!(report.outcome, Outcome::Cancelled);
    assert!(!report.success);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(snapshot(temp.path()), before);
    assert!(!marker_path(temp.path()).exists());
}

#[tokio::test]
async fn test_dry_run_reports_without_writing() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let before = snapshot(temp.path());

    let opts = InitOptions {
        dry_run: true,
        ..options(temp.path())
    };
    let report = run_init(&opts, &mut ScriptedPrompts::new()).await;

    assert_eq!(report.outcome, Outcome::Completed);
    assert!(report.dry_run);
    assert_eq!(report.files_modified, 3);
    assert_eq!(report.verified, Some(true));
    assert_eq!(snapshot(temp.path()), before);
    assert!(!marker_path(temp.path()).exists());

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["dryRun"], true);
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_corrupted_marker_does_not_block() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    fs::write(marker_path(temp.path()), "{\"initialized\": tru").unwrap();

    let mut prompts = ScriptedPrompts::new();
    let report = run_init(&options(temp.path()), &mut prompts).await;

    assert!(!prompts.asked_reinit);
    assert_eq!(report.outcome, Outcome::Completed);
}

#[tokio::test]
async fn test_leftover_placeholder_is_a_warning() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());

    // The client name reintroduces the organization placeholder
    let mut prompts = ScriptedPrompts::new();
    prompts.answers = UserAnswers::new("Syntek Studio", "@acme/ui", "Acme components", "#FF5733");
    let report = run_init(&options(temp.path()), &mut prompts).await;

    assert_eq!(report.outcome, Outcome::Completed);
    assert!(report.success);
    assert_eq!(report.verified, Some(false));
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_invalid_answers_fail_the_run() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let before = snapshot(temp.path());

    let mut prompts = PresetAnswers::new(
        PresetValues {
            client_name: Some("Acme".to_string()),
            package_name: Some("Not A Package".to_string()),
            description: Some("Widgets".to_string()),
            primary_colour: Some("#fff".to_string()),
        },
        false,
    );
    let report = run_init(&options(temp.path()), &mut prompts).await;

    assert_eq!(report.outcome, Outcome::Failed);
    assert_eq!(report.exit_code(), 1);
    assert!(report.error.unwrap().contains("lowercase"));
    assert_eq!(snapshot(temp.path()), before);
}

#[tokio::test]
async fn test_missing_target_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README.md"), "# @syntek-studio/ui\n").unwrap();

    let report = run_init(&options(temp.path()), &mut ScriptedPrompts::new()).await;

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].file, "README.md");
    assert!(report.files[0].modified);
}

#[tokio::test]
async fn test_unreadable_target_fails_without_marker() {
    let temp = TempDir::new().unwrap();
    seed_template(temp.path());
    let readme = temp.path().join("README.md");
    let original: &[u8] = b"# @syntek-studio/ui \xc3\x28\n";
    fs::write(&readme, original).unwrap();

    let report = run_init(&options(temp.path()), &mut ScriptedPrompts::new()).await;

    assert_eq!(report.outcome, Outcome::Failed);
    assert!(!report.success);
    assert_eq!(report.exit_code(), 1);
    assert!(report.error.as_deref().unwrap_or_default().contains("README.md"));
    assert!(report.files.is_empty());
    assert_eq!(fs::read(&readme).unwrap(), original);
    assert!(!temp.path().join("README.md.backup").exists());
    assert!(!marker_path(temp.path()).exists());
}
