use assert_cmd::Command;

pub fn journ_cmd() -> Command {
    let mut cmd = Command::cargo_bin("journ").unwrap();
    cmd.env_remove("JOURN_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
