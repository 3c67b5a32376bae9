use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg("tests/fixtures/purchase.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Vending Machine Items"))
        .stdout(predicate::str::contains("Payment Due: $4.50"))
        .stdout(predicate::str::contains("Payment Due: $2.50"))
        .stdout(predicate::str::contains(
            "Purchase of 3 Green Tea KitKat is completed!",
        ))
        .stdout(predicate::str::contains("YOUR CHANGE: 2 quarter coin(s)"))
        .stdout(predicate::str::contains("Payment Due: $5.00"))
        .stdout(predicate::str::contains("Transaction is canceled!"))
        .stdout(predicate::str::contains("selection,name,price,quantity"))
        .stdout(predicate::str::contains("1,Green Tea KitKat,1.50,7"))
        .stdout(predicate::str::contains("4,Green Tea Oreo,5.00,10"))
        .stdout(predicate::str::contains("profit,4.50"));

    Ok(())
}

#[test]
fn test_script_from_stdin() {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("vending-machine"));
    cmd.write_stdin("action, selection, quantity, amount\nselect, 2, 1, \npay, , , 2\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Purchase of 1 Matcha Pocky is completed!",
        ))
        .stdout(predicate::str::contains("2,Matcha Pocky,2.00,9"))
        .stdout(predicate::str::contains("profit,2.00"));
}

#[test]
fn test_json_report() {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("vending-machine"));
    cmd.arg("--format").arg("json");
    cmd.write_stdin("action, selection, quantity, amount\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"profit\": \"0.00\""))
        .stdout(predicate::str::contains("\"name\": \"Instant Matcha Latte\""));
}
