//! Black-box sessions: scripted input in, exact transcript out.

use std::io::Cursor;

use coffee_cli::CommandLoop;
use coffee_inventory::{InventoryLedger, StockLevels};

const MAIN: &str = "Write action (buy, take, fill, remaining, exit): ";
const BUY: &str =
    "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu: ";
const FILL_WATER: &str = "Write how many ml of water do you want to add: ";
const FILL_MILK: &str = "Write how many ml of milk do you want to add: ";
const FILL_BEANS: &str = "Write how many grams of coffee beans do you want to add: ";
const FILL_CUPS: &str = "Write how many disposable cups of coffee do you want to add: ";

fn session(ledger: InventoryLedger, input: &str) -> (InventoryLedger, String) {
    let mut output = Vec::new();
    let ledger = CommandLoop::new(ledger, Cursor::new(input.to_string()), &mut output)
        .run()
        .expect("session should not fail");
    (ledger, String::from_utf8(output).expect("utf-8 transcript"))
}

fn remaining(water: i64, milk: i64, beans: i64, cups: i64, money: i64) -> String {
    format!(
        "The coffee machine has:\n{water} of water\n{milk} of milk\n{beans} of coffee beans\n{cups} of disposable cups\n${money} of money\n"
    )
}

#[test]
fn remaining_then_exit_prints_factory_state() {
    let (_, transcript) = session(InventoryLedger::new(), "remaining\nexit\n");

    let expected = [MAIN, &*remaining(400, 540, 120, 9, 550), MAIN].concat();
    assert_eq!(transcript, expected);
}

#[test]
fn buying_espresso_then_latte() {
    let (ledger, transcript) = session(InventoryLedger::new(), "buy\n1\nbuy\n2\nremaining\nexit\n");

    let expected = [
        MAIN,
        BUY,
        "I have enough resources, making you a coffee!\n",
        MAIN,
        BUY,
        "Sorry, not enough water!\n",
        MAIN,
        &*remaining(150, 540, 104, 8, 554),
        MAIN,
    ]
    .concat();
    assert_eq!(transcript, expected);
    assert_eq!(
        ledger.levels(),
        StockLevels {
            money: 554,
            water: 150,
            milk: 540,
            beans: 104,
            cups: 8,
        }
    );
}

#[test]
fn back_returns_to_main_menu_without_buying() {
    let (ledger, transcript) = session(InventoryLedger::new(), "buy\nback\nexit\n");

    assert_eq!(transcript, [MAIN, BUY, MAIN].concat());
    assert_eq!(ledger, InventoryLedger::new());
}

#[test]
fn fill_then_remaining() {
    let (_, transcript) = session(
        InventoryLedger::new(),
        "fill\n1000\n1000\n1000\n10\nremaining\nexit\n",
    );

    let expected = [
        MAIN,
        FILL_WATER,
        FILL_MILK,
        FILL_BEANS,
        FILL_CUPS,
        MAIN,
        &*remaining(1400, 1540, 1120, 19, 550),
        MAIN,
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[test]
fn take_empties_the_cash_box() {
    let (ledger, transcript) = session(InventoryLedger::new(), "take\ntake\nexit\n");

    let expected = [MAIN, "I gave you $550\n", MAIN, "I gave you $0\n", MAIN].concat();
    assert_eq!(transcript, expected);
    assert_eq!(ledger.levels().money, 0);
}

#[test]
fn commands_are_case_insensitive() {
    let (ledger, _) = session(InventoryLedger::new(), "BUY\n3\nTake\nEXIT\n");

    let levels = ledger.levels();
    assert_eq!(levels.money, 0);
    assert_eq!(levels.cups, 8);
}

#[test]
fn unknown_command_is_reported_and_loop_continues() {
    let (ledger, transcript) = session(InventoryLedger::new(), "brew\nbuy\n9\nremaining\nexit\n");

    let expected = [
        MAIN,
        "Unknown command: brew\n",
        MAIN,
        BUY,
        "Unknown command: 9\n",
        MAIN,
        &*remaining(400, 540, 120, 9, 550),
        MAIN,
    ]
    .concat();
    assert_eq!(transcript, expected);
    assert_eq!(ledger, InventoryLedger::new());
}

#[test]
fn running_out_of_cups() {
    let start = InventoryLedger::with_levels(StockLevels {
        cups: 1,
        ..StockLevels::default()
    })
    .unwrap();

    let (ledger, transcript) = session(start, "buy\n3\nbuy\n3\nexit\n");

    assert!(transcript.ends_with(&["Sorry, not enough cups!\n", MAIN].concat()));
    assert_eq!(ledger.levels().cups, 0);
    assert_eq!(ledger.levels().money, 556);
}

#[test]
fn end_of_input_acts_like_exit() {
    let (ledger, transcript) = session(InventoryLedger::new(), "buy\n1\n");

    let expected = [
        MAIN,
        BUY,
        "I have enough resources, making you a coffee!\n",
        MAIN,
    ]
    .concat();
    assert_eq!(transcript, expected);
    assert_eq!(ledger.levels().cups, 8);
}

#[test]
fn input_after_exit_is_ignored() {
    let (ledger, transcript) = session(InventoryLedger::new(), "exit\ntake\n");

    assert_eq!(transcript, MAIN);
    assert_eq!(ledger.levels().money, 550);
}

#[test]
fn overflowing_fill_is_reported_and_stock_is_untouched() {
    let (ledger, transcript) = session(
        InventoryLedger::new(),
        "fill\n9223372036854775807\n0\n0\n0\nremaining\nexit\n",
    );

    let expected = [
        MAIN,
        FILL_WATER,
        FILL_MILK,
        FILL_BEANS,
        FILL_CUPS,
        "invariant violated: water would overflow\n",
        MAIN,
        &*remaining(400, 540, 120, 9, 550),
        MAIN,
    ]
    .concat();
    assert_eq!(transcript, expected);
    assert_eq!(ledger, InventoryLedger::new());
}

#[test]
fn padded_menu_number_is_not_a_drink() {
    let (ledger, transcript) = session(InventoryLedger::new(), "buy\n+1\nbuy\n01\nexit\n");

    let expected = [
        MAIN,
        BUY,
        "Unknown command: +1\n",
        MAIN,
        BUY,
        "Unknown command: 01\n",
        MAIN,
    ]
    .concat();
    assert_eq!(transcript, expected);
    assert_eq!(ledger, InventoryLedger::new());
}
