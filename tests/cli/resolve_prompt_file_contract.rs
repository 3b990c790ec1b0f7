use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn resolves_repository_prompt_and_writes_outputs() {
    let ctx = TestContext::new();
    ctx.write_repository_prompt("build", "local prompt");
    ctx.write_action_prompt("build", "bundled prompt");

    ctx.pipeline_cli("build")
        .arg("resolve-prompt-file")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt_file=.cielo/agents/build.md"))
        .stdout(predicate::str::contains("source=repository"));

    assert_eq!(ctx.read_output(), "prompt_file=.cielo/agents/build.md\nsource=repository\n");
}

#[test]
fn falls_back_to_action_prompt() {
    let ctx = TestContext::new();
    let action_prompt = ctx.write_action_prompt("build", "bundled prompt");

    ctx.pipeline_cli("build")
        .arg("resolve-prompt-file")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("prompt_file={}", action_prompt.display())))
        .stdout(predicate::str::contains("source=action"));

    assert!(ctx.read_output().ends_with("source=action\n"));
}

#[test]
fn reports_default_when_no_prompt_exists() {
    let ctx = TestContext::new();

    ctx.pipeline_cli("deploy")
        .arg("resolve-prompt-file")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt_file=.cielo/agents/deploy.md"))
        .stdout(predicate::str::contains("source=default"));
}

#[test]
fn flags_override_environment() {
    let ctx = TestContext::new();
    ctx.write_repository_prompt("lint", "local");

    ctx.cli()
        .args(["resolve-prompt-file", "--job", "lint", "--action-path"])
        .arg(ctx.action_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("source=repository"));
}

#[test]
fn missing_job_fails_without_output() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("GITHUB_ACTION_PATH", ctx.action_dir())
        .env("GITHUB_OUTPUT", ctx.output_file())
        .arg("resolve-prompt-file")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("GITHUB_JOB environment variable is required"));

    assert!(!ctx.output_file().exists());
}

#[test]
fn missing_action_path_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("GITHUB_JOB", "build")
        .arg("resolve-prompt-file")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_ACTION_PATH environment variable is required"));
}

#[test]
fn works_without_output_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("GITHUB_JOB", "build")
        .env("GITHUB_ACTION_PATH", ctx.action_dir())
        .arg("resolve-prompt-file")
        .assert()
        .success()
        .stdout(predicate::str::contains("source=default"));

    assert!(!ctx.output_file().exists());
}

#[test]
fn job_with_line_break_fails_without_writing_outputs() {
    let ctx = TestContext::new();

    ctx.pipeline_cli("build\ninjected=1")
        .arg("resolve-prompt-file")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Output 'prompt_file' must be a single line"));

    assert_eq!(ctx.read_output(), "");
}
