use std::collections::BTreeSet;
use watercooler::core::{ChargeLogic, DrinkLogic, EditLogic, PayLogic, ResetLogic};
use watercooler::errors::AppError;
use watercooler::models::{ChargeOutcome, DrinkSize, Ledger, Person};
use watercooler::store::ledger::{parse_ledger, reconcile_edit, render_ledger};
use watercooler::store::{LedgerStore, MemoryStorage};

const HEADER: &str = "Nome,Divida,Pago,Copo_ML_Hoje\n";

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn seeded(contents: &str) -> LedgerStore<MemoryStorage> {
    LedgerStore::new(MemoryStorage::with_contents(contents))
}

#[test]
fn test_load_without_data_gives_empty_ledger() {
    let store = LedgerStore::new(MemoryStorage::new());
    let ledger = store.load().expect("load");
    assert!(ledger.is_empty());

    // nothing is written by a load
    assert!(store.storage().contents().is_none());
}

#[test]
fn test_empty_ledger_is_saved_with_all_columns() {
    let mut store = LedgerStore::new(MemoryStorage::new());
    assert!(store.ensure_exists().unwrap());
    assert_eq!(store.storage().contents().unwrap(), HEADER);

    // second call leaves the table alone
    assert!(!store.ensure_exists().unwrap());
}

#[test]
fn test_load_defaults_missing_cells() {
    let csv = format!("{HEADER}Ana,,,\nBeto,10.5,True,300\n");
    let ledger = parse_ledger(csv.as_bytes()).unwrap();

    assert_eq!(ledger.people()[0], Person::new("Ana"));
    assert_eq!(
        ledger.people()[1],
        Person::new("Beto").with_debt(10.5).with_paid(true).with_ml(300)
    );
}

#[test]
fn test_load_drops_rows_without_name() {
    let csv = format!("{HEADER}Ana,1,False,0\n,3,False,0\nnan,1,True,0\nCaio,0,False,0\n");
    let ledger = parse_ledger(csv.as_bytes()).unwrap();

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.names(), vec!["Ana", "Caio"]);
}

#[test]
fn test_load_coerces_loose_values() {
    // short row, float ml, lowercase flag, garbage debt
    let csv = format!("{HEADER}Ana,abc,true,300.0\nBeto,2\n");
    let ledger = parse_ledger(csv.as_bytes()).unwrap();

    let ana = ledger.find("Ana").unwrap();
    assert_eq!(ana.debt, 0.0);
    assert!(ana.paid);
    assert_eq!(ana.drunk_today_ml, 300);

    let beto = ledger.find("Beto").unwrap();
    assert_eq!(beto.debt, 2.0);
    assert!(!beto.paid);
    assert_eq!(beto.drunk_today_ml, 0);
}

#[test]
fn test_load_ignores_missing_and_extra_columns() {
    let csv = "Unnamed: 0,Nome,Divida\n0,Ana,4.5\n";
    let ledger = parse_ledger(csv.as_bytes()).unwrap();
    assert_eq!(ledger.people(), &[Person::new("Ana").with_debt(4.5)]);
}

#[test]
fn test_normalization_is_stable_across_save_and_load() {
    let csv = format!("{HEADER}Ana,,,\nBeto,10.5,True,300\n,1,,\n");
    let mut store = seeded(&csv);

    let first = store.load().unwrap();
    store.save(&first).unwrap();
    let second = store.load().unwrap();

    assert_eq!(first, second);
    assert_eq!(
        store.storage().contents().unwrap(),
        format!("{HEADER}Ana,0.0,False,0\nBeto,10.5,True,300\n")
    );
}

#[test]
fn test_add_debt_charges_selected_and_clears_paid() {
    let mut ledger = Ledger::new(vec![
        Person::new("A").with_debt(10.0).with_paid(true),
        Person::new("B"),
    ]);

    let outcome = ledger.add_debt(&names(&["A"]), 5.0).unwrap();

    assert_eq!(outcome, ChargeOutcome::Charged(1));
    assert_eq!(ledger.people()[0], Person::new("A").with_debt(15.0));
    assert_eq!(ledger.people()[1], Person::new("B"));
}

#[test]
fn test_add_debt_with_empty_selection_is_a_noop() {
    let mut ledger = Ledger::new(vec![Person::new("A").with_debt(10.0).with_paid(true)]);
    let before = ledger.clone();

    let outcome = ledger.add_debt(&BTreeSet::new(), 5.0).unwrap();

    assert_eq!(outcome, ChargeOutcome::NoSelection);
    assert_eq!(ledger, before);
}

#[test]
fn test_add_debt_rejects_non_positive_amount() {
    let mut ledger = Ledger::new(vec![Person::new("A")]);
    let err = ledger.add_debt(&names(&["A"]), 0.0).unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));
    assert_eq!(ledger.people()[0].debt, 0.0);
}

#[test]
fn test_add_debt_hits_every_row_with_the_name() {
    let mut ledger = Ledger::new(vec![Person::new("A"), Person::new("A"), Person::new("B")]);
    let outcome = ledger.add_debt(&names(&["A"]), 2.5).unwrap();
    assert_eq!(outcome, ChargeOutcome::Charged(2));
    assert_eq!(ledger.outstanding_total(), 5.0);
}

#[test]
fn test_charge_without_selection_writes_nothing() {
    let csv = format!("{HEADER}A,10,True,0\n");
    let mut store = seeded(&csv);

    let outcome = ChargeLogic::apply(&mut store, &BTreeSet::new(), 5.0).unwrap();

    assert_eq!(outcome, ChargeOutcome::NoSelection);
    assert_eq!(store.storage().contents().unwrap(), csv);
}

#[test]
fn test_charge_persists_new_debt() {
    let mut store = seeded(&format!("{HEADER}A,10,True,0\nB,0,False,0\n"));

    ChargeLogic::apply(&mut store, &names(&["A"]), 5.0).unwrap();

    let ledger = store.load().unwrap();
    assert_eq!(ledger.find("A").unwrap(), &Person::new("A").with_debt(15.0));
    assert_eq!(ledger.find("B").unwrap(), &Person::new("B"));
}

#[test]
fn test_record_drink_accumulates() {
    let mut ledger = Ledger::new(vec![Person::new("A")]);

    assert!(ledger.record_drink("A", DrinkSize::Medium));
    assert!(ledger.record_drink("A", DrinkSize::Small));

    assert_eq!(ledger.find("A").unwrap().drunk_today_ml, 500);
}

#[test]
fn test_record_drink_for_unknown_name_changes_nothing() {
    let mut ledger = Ledger::new(vec![Person::new("A").with_ml(200)]);
    let before = ledger.clone();

    assert!(!ledger.record_drink("Z", DrinkSize::Large));
    assert_eq!(ledger, before);
}

#[test]
fn test_drink_logic_persists_immediately() {
    let mut store = seeded(&format!("{HEADER}A,0,False,0\n"));

    assert!(DrinkLogic::apply(&mut store, "A", DrinkSize::Medium).unwrap());
    assert!(DrinkLogic::apply(&mut store, "A", DrinkSize::Small).unwrap());

    assert_eq!(store.load().unwrap().find("A").unwrap().drunk_today_ml, 500);
}

#[test]
fn test_drink_logic_unknown_name_is_silent() {
    let csv = format!("{HEADER}A,0,False,0\n");
    let mut store = seeded(&csv);

    assert!(!DrinkLogic::apply(&mut store, "Z", DrinkSize::Large).unwrap());
    assert_eq!(store.storage().contents().unwrap(), csv);
}

#[test]
fn test_drink_sizes() {
    assert_eq!(DrinkSize::from_ml(200), Some(DrinkSize::Small));
    assert_eq!(DrinkSize::from_ml(500), Some(DrinkSize::Large));
    assert!(matches!(
        DrinkSize::try_from(250),
        Err(AppError::InvalidDrinkSize(250))
    ));
}

#[test]
fn test_reset_daily_zeroes_everyone() {
    let mut store = seeded(&format!("{HEADER}A,1,False,500\nB,0,True,0\nC,2,False,1300\n"));

    ResetLogic::apply(&mut store).unwrap();

    let ledger = store.load().unwrap();
    assert!(ledger.people().iter().all(|p| p.drunk_today_ml == 0));
    // debts survive the reset
    assert_eq!(ledger.find("C").unwrap().debt, 2.0);
}

#[test]
fn test_rank_is_stable_on_ties() {
    let ledger = Ledger::new(vec![
        Person::new("A").with_ml(500),
        Person::new("B").with_ml(500),
        Person::new("C").with_ml(200),
    ]);

    let ranking = ledger.rank();
    let order: Vec<&str> = ranking.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(order, vec!["A", "B", "C"]);
    assert_eq!(ranking.leader().unwrap().name, "A");
    assert!(ranking.has_activity());

    // iterating again yields the same sequence
    let again: Vec<&str> = ranking.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(again, order);
}

#[test]
fn test_rank_sorts_descending() {
    let ledger = Ledger::new(vec![
        Person::new("A").with_ml(200),
        Person::new("B"),
        Person::new("C").with_ml(800),
    ]);

    let order: Vec<&str> = ledger.rank().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(order, vec!["C", "A", "B"]);
}

#[test]
fn test_rank_without_drinks_has_no_activity() {
    let ledger = Ledger::new(vec![Person::new("A"), Person::new("B")]);
    let ranking = ledger.rank();
    assert_eq!(ranking.leader().unwrap().name, "A");
    assert!(!ranking.has_activity());

    let empty = Ledger::default();
    assert!(empty.rank().leader().is_none());
    assert!(!empty.rank().has_activity());
}

#[test]
fn test_pay_keeps_debt() {
    let mut store = seeded(&format!("{HEADER}A,12,False,0\n"));

    assert_eq!(PayLogic::apply(&mut store, &names(&["A"]), true).unwrap(), 1);

    let a = store.load().unwrap().find("A").cloned().unwrap();
    assert!(a.paid);
    assert_eq!(a.debt, 12.0);
    assert_eq!(store.load().unwrap().outstanding_total(), 0.0);
}

#[test]
fn test_bulk_edit_defaults_new_rows() {
    let mut store = seeded(&format!("{HEADER}A,3,True,200\n"));
    let edited = format!("{HEADER}A,3,True,200\nNova,,,\n");

    let ledger = EditLogic::replace(&mut store, edited.as_bytes()).unwrap();

    assert_eq!(ledger.len(), 2);
    assert_eq!(store.load().unwrap().find("Nova").unwrap(), &Person::new("Nova"));
}

#[test]
fn test_bulk_edit_rejects_nameless_rows() {
    let original = format!("{HEADER}A,3,True,200\n");
    let mut store = seeded(&original);
    let edited = format!("{HEADER}A,3,True,200\n,5,,\n");

    let err = EditLogic::replace(&mut store, edited.as_bytes()).unwrap_err();

    assert!(matches!(err, AppError::EmptyName(2)));
    assert_eq!(store.storage().contents().unwrap(), original);
}

#[test]
fn test_bulk_edit_last_save_wins() {
    let mut store = seeded(&format!("{HEADER}A,0,False,0\n"));

    // a bulk edit prepared before a drink was recorded...
    let stale = render_ledger(&store.load().unwrap()).unwrap();
    DrinkLogic::apply(&mut store, "A", DrinkSize::Large).unwrap();

    // ...overwrites it when saved
    EditLogic::replace(&mut store, &stale).unwrap();
    assert_eq!(store.load().unwrap().find("A").unwrap().drunk_today_ml, 0);
}

#[test]
fn test_reconcile_matches_load_defaults() {
    let csv = format!("{HEADER}Ana,,,\n");
    assert_eq!(
        reconcile_edit(csv.as_bytes()).unwrap(),
        parse_ledger(csv.as_bytes()).unwrap()
    );
}

#[test]
fn test_edit_cells_and_remove() {
    let mut store = seeded(&format!("{HEADER}A,3,True,200\nB,1,False,0\n"));

    EditLogic::set(&mut store, "A", Some(0.0), None, Some(0)).unwrap();
    let a = store.load().unwrap().find("A").cloned().unwrap();
    assert_eq!(a, Person::new("A").with_paid(true));

    assert!(matches!(
        EditLogic::set(&mut store, "Z", Some(1.0), None, None),
        Err(AppError::UnknownPerson(_))
    ));

    assert_eq!(EditLogic::remove(&mut store, &names(&["B"])).unwrap(), 1);
    assert_eq!(store.load().unwrap().names(), vec!["A"]);
}

#[test]
fn test_add_rejects_empty_names() {
    let mut store = LedgerStore::new(MemoryStorage::new());
    let err = EditLogic::add(&mut store, &["Ana".to_string(), "  ".to_string()]).unwrap_err();
    assert!(matches!(err, AppError::EmptyName(2)));
    assert!(store.storage().contents().is_none());
}
