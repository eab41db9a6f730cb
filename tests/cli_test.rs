use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run classicrypt against a config file that does not exist yet,
/// so the user's real config never leaks into a test.
fn classicrypt(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("classicrypt");
    cmd.current_dir(dir.path())
        .env_remove("CLASSICRYPT_LOG")
        .env("CLASSICRYPT_CONFIG", dir.path().join("config.toml"));
    cmd
}

/// Write a config enabling history next to the temp dir.
fn with_history(dir: &assert_fs::TempDir) {
    dir.child("config.toml")
        .write_str("[history]\nenabled = true\n")
        .unwrap();
}

fn empty_config(dir: &assert_fs::TempDir) {
    dir.child("config.toml").write_str("").unwrap();
}

#[test]
fn caesar_encrypt_normalizes_input() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "caesar", "--shift", "3", "hello, world"])
        .assert()
        .success()
        .stdout("KHOORZRUOG\n");
}

#[test]
fn caesar_raw_keeps_case_and_punctuation() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["--raw", "decrypt", "caesar", "--shift", "-23", "Khoor, Zruog!"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn railfence_reads_stdin() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "railfence", "--rails", "3"])
        .write_stdin("we are discovered, flee at once\n")
        .assert()
        .success()
        .stdout("WECRLTEERDSOEEFEAOCAIVDEN\n");

    classicrypt(&dir)
        .args(["decrypt", "railfence", "-r", "3", "WECRLTEERDSOEEFEAOCAIVDEN"])
        .assert()
        .success()
        .stdout("WEAREDISCOVEREDFLEEATONCE\n");
}

#[test]
fn railfence_huge_rail_count() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "railfence", "--rails", "1099511627776", "abc"])
        .assert()
        .success()
        .stdout("ABC\n");
}

#[test]
fn caesar_extreme_shifts() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "caesar", "--shift", "9223372036854775807", "B"])
        .assert()
        .success()
        .stdout("I\n");

    classicrypt(&dir)
        .args(["decrypt", "caesar", "--shift", "-9223372036854775808", "S"])
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn railfence_one_rail_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "railfence", "--rails", "1", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rails must be at least 2"));
}

#[test]
fn railfence_empty_text_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "railfence", "--rails", "2", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("text must not be empty"));
}

#[test]
fn playfair_round_trip() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "playfair", "--key", "monarchy", "hello"])
        .assert()
        .success()
        .stdout("CFSUPM\n");

    classicrypt(&dir)
        .args(["decrypt", "playfair", "-k", "MONARCHY", "CFSUPM"])
        .assert()
        .success()
        .stdout("HELXLO\n");
}

#[test]
fn playfair_odd_ciphertext_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["decrypt", "playfair", "-k", "MONARCHY", "CFS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("even number of letters"));
}

#[test]
fn hill_uses_default_matrix() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "hill", "act"])
        .assert()
        .success()
        .stdout("POH\n");

    classicrypt(&dir)
        .args(["decrypt", "hill", "POH"])
        .assert()
        .success()
        .stdout("ACT\n");
}

#[test]
fn hill_custom_matrix() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "hill", "--matrix", "3,3,2,5", "help"])
        .assert()
        .success()
        .stdout("HIAT\n");
}

#[test]
fn hill_non_square_matrix_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "hill", "--matrix", "1,2,3", "ABC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("perfect square"));
}

#[test]
fn hill_singular_matrix_cannot_decrypt() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["decrypt", "hill", "--matrix", "2,4,1,2", "ABCD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not invertible"));
}

#[test]
fn hill_matrix_from_config() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config.toml")
        .write_str("[hill]\nmatrix = [3, 3, 2, 5]\n")
        .unwrap();

    classicrypt(&dir)
        .args(["encrypt", "hill", "HELP"])
        .assert()
        .success()
        .stdout("HIAT\n");
}

#[test]
fn poly_raw_advances_key_over_punctuation() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["--raw", "encrypt", "poly", "--key", "KEY", "he llo"])
        .assert()
        .success()
        .stdout("RI VPM\n");
}

#[test]
fn poly_empty_key_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "poly", "--key", "", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key must not be empty"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    classicrypt(&dir)
        .args(["encrypt", "caesar", "-s", "1", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_can_disable_normalization() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config.toml")
        .write_str("[classicrypt]\nnormalize_input = false\n")
        .unwrap();

    classicrypt(&dir)
        .args(["encrypt", "caesar", "-s", "1", "a-b"])
        .assert()
        .success()
        .stdout("b-c\n");
}

#[test]
fn list_shows_every_cipher() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("caesar"))
        .stdout(predicate::str::contains("railfence"))
        .stdout(predicate::str::contains("playfair"))
        .stdout(predicate::str::contains("hill"))
        .stdout(predicate::str::contains("poly"));
}

#[test]
fn history_records_operations() {
    let dir = assert_fs::TempDir::new().unwrap();
    with_history(&dir);

    classicrypt(&dir)
        .args(["encrypt", "caesar", "-s", "3", "SECRETTEXT"])
        .assert()
        .success();
    classicrypt(&dir)
        .args(["encrypt", "poly", "-k", "KEY", "HELLO"])
        .assert()
        .success();

    let history = dir.child("history.log");
    history.assert(predicate::path::exists());
    history.assert(predicate::str::contains("\"cipher\":\"caesar\""));
    // only sizes and a digest are stored
    history.assert(predicate::str::contains("SECRETTEXT").not());

    classicrypt(&dir)
        .args(["log", "--cipher", "poly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries"))
        .stdout(predicate::str::contains("poly"));

    classicrypt(&dir)
        .args(["log", "--last", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"));
}

#[test]
fn history_disabled_by_default() {
    let dir = assert_fs::TempDir::new().unwrap();
    empty_config(&dir);

    classicrypt(&dir)
        .args(["encrypt", "caesar", "-s", "3", "ABC"])
        .assert()
        .success();

    dir.child("history.log").assert(predicate::path::missing());
}

#[test]
fn log_unknown_cipher_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    with_history(&dir);

    classicrypt(&dir)
        .args(["log", "--cipher", "enigma"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown cipher 'enigma'"));
}
