use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_people, read_inventory, read_ledger, scratch_dir, table_paths, wc};

#[test]
fn test_init_creates_both_tables() {
    let dir = scratch_dir("init");

    wc(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Ledger created"));

    assert_eq!(read_ledger(&dir), "Nome,Divida,Pago,Copo_ML_Hoje\n");
    assert!(read_inventory(&dir).contains("15.0,2,1,False,-"));

    // running it again keeps the ledger
    wc(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Ledger kept"));
}

#[test]
fn test_list_empty_ledger() {
    let dir = scratch_dir("list_empty");

    wc(&dir)
        .args(["ledger", "list"])
        .assert()
        .success()
        .stdout(contains("The ledger is empty"));
}

#[test]
fn test_charge_and_list() {
    let dir = scratch_dir("charge_list");
    init_with_people(&dir, &["Ana", "Beto"]);

    wc(&dir)
        .args(["charge", "--amount", "7.5", "Ana"])
        .assert()
        .success()
        .stdout(contains("Charged 7.50 to 1 row(s)"));

    wc(&dir)
        .args(["ledger", "list"])
        .assert()
        .success()
        .stdout(contains("Ana").and(contains("R$ 7.50")))
        .stdout(contains("Outstanding: R$ 7.50"));
}

#[test]
fn test_charge_uses_default_amount() {
    let dir = scratch_dir("charge_default");
    init_with_people(&dir, &["Ana"]);

    wc(&dir).args(["charge", "Ana"]).assert().success();

    assert!(read_ledger(&dir).contains("Ana,5.0,False,0"));
}

#[test]
fn test_charge_without_names_only_warns() {
    let dir = scratch_dir("charge_empty");
    init_with_people(&dir, &["Ana"]);
    let before = read_ledger(&dir);

    wc(&dir)
        .arg("charge")
        .assert()
        .success()
        .stdout(contains("Select at least one person"));

    assert_eq!(read_ledger(&dir), before);
}

#[test]
fn test_pay_then_charge_again_clears_paid() {
    let dir = scratch_dir("pay_charge");
    init_with_people(&dir, &["Ana"]);

    wc(&dir).args(["charge", "-a", "5", "Ana"]).assert().success();
    wc(&dir).args(["pay", "Ana"]).assert().success();
    assert!(read_ledger(&dir).contains("Ana,5.0,True,0"));

    wc(&dir).args(["charge", "-a", "5", "Ana"]).assert().success();
    assert!(read_ledger(&dir).contains("Ana,10.0,False,0"));
}

#[test]
fn test_drink_rank_and_reset() {
    let dir = scratch_dir("drink_rank");
    init_with_people(&dir, &["Ana", "Beto", "Caio"]);

    wc(&dir).args(["drink", "Beto", "--ml", "500"]).assert().success();
    wc(&dir).args(["drink", "Ana", "--ml", "200"]).assert().success();
    wc(&dir).args(["drink", "Ana"]).assert().success();

    assert!(read_ledger(&dir).contains("Ana,0.0,False,500"));

    wc(&dir)
        .arg("rank")
        .assert()
        .success()
        .stdout(contains("Hydration leader").and(contains("Ana")));

    wc(&dir).arg("reset-day").assert().success();

    wc(&dir)
        .arg("rank")
        .assert()
        .success()
        .stdout(contains("Nobody has had water today yet"));
}

#[test]
fn test_drink_rejects_odd_cup_size() {
    let dir = scratch_dir("drink_size");
    init_with_people(&dir, &["Ana"]);

    wc(&dir)
        .args(["drink", "Ana", "--ml", "250"])
        .assert()
        .failure()
        .stderr(contains("250"));
}

#[test]
fn test_drink_for_unknown_name_succeeds_silently() {
    let dir = scratch_dir("drink_unknown");
    init_with_people(&dir, &["Ana"]);
    let before = read_ledger(&dir);

    wc(&dir).args(["drink", "Zoe", "--ml", "200"]).assert().success();

    assert_eq!(read_ledger(&dir), before);
}

#[test]
fn test_ledger_set_and_remove() {
    let dir = scratch_dir("set_remove");
    init_with_people(&dir, &["Ana", "Beto"]);

    wc(&dir)
        .args(["ledger", "set", "Ana", "--debt", "3", "--paid", "true"])
        .assert()
        .success();
    assert!(read_ledger(&dir).contains("Ana,3.0,True,0"));

    wc(&dir)
        .args(["ledger", "set", "Nobody", "--debt", "3"])
        .assert()
        .failure()
        .stderr(contains("No person named 'Nobody'"));

    wc(&dir).args(["ledger", "remove", "Beto"]).assert().success();
    assert!(!read_ledger(&dir).contains("Beto"));
}

#[test]
fn test_ledger_import_reconciles_rows() {
    let dir = scratch_dir("import");
    init_with_people(&dir, &["Ana"]);

    let edited = dir.join("edited.csv");
    fs::write(
        &edited,
        "Nome,Divida,Pago,Copo_ML_Hoje\nAna,2,False,0\nNova,,,\n",
    )
    .unwrap();

    wc(&dir)
        .args(["ledger", "import", &edited.to_string_lossy()])
        .assert()
        .success();

    assert_eq!(
        read_ledger(&dir),
        "Nome,Divida,Pago,Copo_ML_Hoje\nAna,2.0,False,0\nNova,0.0,False,0\n"
    );
}

#[test]
fn test_ledger_import_rejects_missing_name() {
    let dir = scratch_dir("import_bad");
    init_with_people(&dir, &["Ana"]);
    let before = read_ledger(&dir);

    let edited = dir.join("edited.csv");
    fs::write(&edited, "Nome,Divida,Pago,Copo_ML_Hoje\n,2,False,0\n").unwrap();

    wc(&dir)
        .args(["ledger", "import", &edited.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Empty name in row 1"));

    assert_eq!(read_ledger(&dir), before);
}

#[test]
fn test_stock_show_and_reorder() {
    let dir = scratch_dir("stock");
    wc(&dir).arg("init").assert().success();

    wc(&dir)
        .arg("stock")
        .assert()
        .success()
        .stdout(contains("R$ 15.00").and(contains("Last order: -")));

    wc(&dir)
        .args(["stock", "--price", "17", "--ordered"])
        .assert()
        .success()
        .stdout(contains("Stock saved!"));

    let inv = read_inventory(&dir);
    assert!(inv.contains("17.0,2,1,True,"));
    assert!(!inv.trim_end().ends_with(",-"));

    wc(&dir).args(["stock", "--not-ordered"]).assert().success();
    assert!(read_inventory(&dir).contains("17.0,2,1,False,-"));
}

#[test]
fn test_stock_rejects_conflicting_order_flags() {
    let dir = scratch_dir("stock_conflict");

    wc(&dir)
        .args(["stock", "--ordered", "--not-ordered"])
        .assert()
        .failure();
}

#[test]
fn test_export_json() {
    let dir = scratch_dir("export_json");
    init_with_people(&dir, &["Ana", "Beto"]);
    wc(&dir).args(["drink", "Beto", "--ml", "500"]).assert().success();

    let out = dir.join("ledger.json");
    wc(&dir)
        .args([
            "export",
            "--format",
            "json",
            "--file",
            &out.to_string_lossy(),
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"name\": \"Ana\""));
    assert!(content.contains("\"drunk_today_ml\": 500"));
    assert!(content.contains("\"rank\": 1"));
}

#[test]
fn test_export_requires_absolute_path() {
    let dir = scratch_dir("export_relative");
    init_with_people(&dir, &["Ana"]);

    wc(&dir)
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_list_reads_spreadsheet_written_table() {
    let dir = scratch_dir("compat");
    let (ledger, _) = table_paths(&dir);
    fs::write(
        &ledger,
        "Nome,Divida,Pago,Copo_ML_Hoje\nAna,10.0,True,300\nnan,,,\n",
    )
    .unwrap();

    wc(&dir)
        .args(["ledger", "list"])
        .assert()
        .success()
        .stdout(contains("Ana").and(contains("nan").not()));
}
