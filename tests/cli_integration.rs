use assert_cmd::Command;

// Every test points XDG_CONFIG_HOME/HOME at a temp dir so a developer's real
// wordbook.env can never leak in, and scrubs the WORDBOOK_* variables before
// setting its own.
fn wordbook(temp_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("wordbook").unwrap();
    cmd.env("HOME", temp_home)
        .env("XDG_CONFIG_HOME", temp_home.join(".config"))
        .env_remove("WORDBOOK_GEMINI_API_KEY")
        .env_remove("WORDBOOK_GEMINI_MODEL")
        .env_remove("WORDBOOK_NOTEBOOK_FILE")
        .env_remove("WORDBOOK_GIT_REMOTE_URL");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    let temp = tempfile::tempdir().unwrap();
    wordbook(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn info_shows_features_and_paths() {
    let temp = tempfile::tempdir().unwrap();
    wordbook(temp.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicates::str::contains("Wordbook"))
        .stdout(predicates::str::contains("Notebook file:"))
        .stdout(predicates::str::contains("wordbook.env"));
}

#[test]
fn invalid_word_fails_before_any_network_call() {
    let temp = tempfile::tempdir().unwrap();
    let notebook = temp.path().join("wordbook.md");

    wordbook(temp.path())
        .env("WORDBOOK_GEMINI_API_KEY", "test-key")
        .env("WORDBOOK_NOTEBOOK_FILE", &notebook)
        .arg("123abc")
        .assert()
        .failure()
        .stderr(predicates::str::contains("letters and hyphens"));

    // Validation failed, so nothing may have been written.
    assert!(!notebook.exists());
}

#[test]
fn missing_api_key_is_a_fatal_configuration_error() {
    let temp = tempfile::tempdir().unwrap();

    // stdin is not a terminal here, so no interactive remediation happens.
    wordbook(temp.path())
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicates::str::contains("WORDBOOK_GEMINI_API_KEY"));
}

#[test]
fn save_writes_the_notebook_without_touching_the_api() {
    let temp = tempfile::tempdir().unwrap();
    let notebook = temp.path().join("book/wordbook.md");

    wordbook(temp.path())
        .env("WORDBOOK_GEMINI_API_KEY", "test-key")
        .env("WORDBOOK_NOTEBOOK_FILE", &notebook)
        .arg("save")
        .arg("## manual entry\n\nwritten by hand")
        .assert()
        .success()
        .stdout(predicates::str::contains("Saved entry"));

    let content = std::fs::read_to_string(&notebook).unwrap();
    assert!(content.starts_with("# My English Word Book"));
    assert!(content.contains("## manual entry"));
}

#[test]
fn saved_entries_are_most_recent_first() {
    let temp = tempfile::tempdir().unwrap();
    let notebook = temp.path().join("wordbook.md");

    for entry in ["## first", "## second"] {
        wordbook(temp.path())
            .env("WORDBOOK_GEMINI_API_KEY", "test-key")
            .env("WORDBOOK_NOTEBOOK_FILE", &notebook)
            .arg("save")
            .arg(entry)
            .assert()
            .success();
    }

    let content = std::fs::read_to_string(&notebook).unwrap();
    let second = content.find("## second").unwrap();
    let first = content.find("## first").unwrap();
    assert!(second < first);
}

#[test]
fn empty_save_content_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let notebook = temp.path().join("wordbook.md");

    wordbook(temp.path())
        .env("WORDBOOK_GEMINI_API_KEY", "test-key")
        .env("WORDBOOK_NOTEBOOK_FILE", &notebook)
        .arg("save")
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicates::str::contains("nothing to save"));

    assert!(!notebook.exists());
}
