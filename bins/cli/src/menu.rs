//! Menu loop and the actions behind each entry.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use teller_core::account::AccountType;
use teller_core::bank::{Bank, BankError};
use teller_core::currency::CurrencyService;
use teller_shared::{AccountId, AppError, AppResult};

use crate::console::{Console, SessionError};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ConvertCurrency,
    ApplyForLoan,
    RepayLoan,
    ViewLoanDetails,
    ScheduleTransfer,
    ExecuteScheduledTransfers,
    OpenAccount,
    Deposit,
    Withdraw,
    Transfer,
    AccountHistory,
    SearchJournal,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order, with their labels.
    const ENTRIES: [(u8, Self, &'static str); 13] = [
        (1, Self::ConvertCurrency, "Convert Currency"),
        (2, Self::ApplyForLoan, "Apply for Loan"),
        (3, Self::RepayLoan, "Repay Loan"),
        (4, Self::ViewLoanDetails, "View Loan Details"),
        (5, Self::ScheduleTransfer, "Schedule a Transfer"),
        (6, Self::ExecuteScheduledTransfers, "Execute Scheduled Transfers"),
        (7, Self::OpenAccount, "Open Account"),
        (8, Self::Deposit, "Deposit"),
        (9, Self::Withdraw, "Withdraw"),
        (10, Self::Transfer, "Transfer"),
        (11, Self::AccountHistory, "Account History"),
        (12, Self::SearchJournal, "Search Journal"),
        (0, Self::Exit, "Exit"),
    ];
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s.trim().parse().map_err(|_| ())?;
        Self::ENTRIES
            .iter()
            .find(|(n, _, _)| *n == number)
            .map(|(_, choice, _)| *choice)
            .ok_or(())
    }
}

/// Runs the menu until the user exits or input ends.
///
/// Rejected operations are printed as `Error: {message}` and the loop
/// continues. Only console I/O failures are returned.
pub fn run<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> AppResult<()> {
    loop {
        print_menu(console)?;
        let raw = match console.prompt("Enter your choice: ") {
            Ok(raw) => raw,
            Err(SessionError::EndOfInput) => break,
            Err(e) => return Err(e.into()),
        };

        let Ok(choice) = raw.parse::<MenuChoice>() else {
            console.line("Invalid choice. Please try again.")?;
            continue;
        };
        if choice == MenuChoice::Exit {
            break;
        }

        match dispatch(bank, console, choice) {
            Ok(()) => {}
            Err(SessionError::EndOfInput) => break,
            Err(e) if e.is_recoverable() => {
                tracing::debug!(?choice, code = e.error_code(), error = %e, "menu action failed");
                console.line(format_args!("Error: {e}"))?;
            }
            Err(e) => return Err(AppError::from(e)),
        }
    }

    console.line("Exiting the Banking System. Goodbye!")?;
    Ok(())
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> std::io::Result<()> {
    console.line("")?;
    console.line("Welcome to the Banking System")?;
    for (number, _, label) in MenuChoice::ENTRIES {
        console.line(format_args!("{number}. {label}"))?;
    }
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
    choice: MenuChoice,
) -> Result<(), SessionError> {
    match choice {
        MenuChoice::ConvertCurrency => convert_currency(bank, console),
        MenuChoice::ApplyForLoan => apply_for_loan(bank, console),
        MenuChoice::RepayLoan => repay_loan(bank, console),
        MenuChoice::ViewLoanDetails => view_loan_details(bank, console),
        MenuChoice::ScheduleTransfer => schedule_transfer(bank, console),
        MenuChoice::ExecuteScheduledTransfers => execute_scheduled_transfers(bank, console),
        MenuChoice::OpenAccount => open_account(bank, console),
        MenuChoice::Deposit => deposit(bank, console),
        MenuChoice::Withdraw => withdraw(bank, console),
        MenuChoice::Transfer => transfer(bank, console),
        MenuChoice::AccountHistory => account_history(bank, console),
        MenuChoice::SearchJournal => search_journal(bank, console),
        MenuChoice::Exit => Ok(()),
    }
}

fn money(value: Decimal) -> String {
    CurrencyService::format(value)
}

fn prompt_currency<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<String, SessionError> {
    Ok(console.prompt(label)?.to_uppercase())
}

// ========== Currency ==========

fn convert_currency<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let from = prompt_currency(console, "Enter source currency (e.g., USD): ")?;
    let to = prompt_currency(console, "Enter target currency (e.g., INR): ")?;
    let amount: Decimal = console.prompt_parsed("Enter amount to convert: ", "amount")?;

    let converted = bank.convert(&from, &to, amount)?;
    console.line(format_args!("Converted Amount: {} {to}", money(converted)))?;
    Ok(())
}

// ========== Loans ==========

fn apply_for_loan<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let account_id = console.prompt("Enter Account ID: ")?;
    let principal: Decimal = console.prompt_parsed("Enter Loan Amount: ", "loan amount")?;
    let rate: Decimal = console.prompt_parsed(
        "Enter Interest Rate (as a decimal, e.g., 0.1 for 10%): ",
        "interest rate",
    )?;
    let tenure: u32 = console.prompt_parsed("Enter Tenure (in months): ", "tenure")?;

    let loan = bank.apply_for_loan(&account_id, principal, rate, tenure)?;
    let outstanding = loan.outstanding_amount();
    console.line("Loan application successful.")?;
    console.line(format_args!("Outstanding Amount: {}", money(outstanding)))?;
    Ok(())
}

fn repay_loan<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let account_id = console.prompt("Enter Account ID: ")?;
    let payment: Decimal = console.prompt_parsed("Enter Repayment Amount: ", "repayment amount")?;

    let repayment = bank.repay_loan(&account_id, payment)?;
    console.line("Loan repayment successful.")?;
    if repayment.settled {
        console.line("Loan fully repaid.")?;
    } else {
        console.line(format_args!(
            "Outstanding Amount: {}",
            money(repayment.outstanding)
        ))?;
    }
    Ok(())
}

fn view_loan_details<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let account_id = console.prompt("Enter Account ID: ")?;

    let Some(loan) = bank.loan_details(&account_id) else {
        console.line("No active loan for this account.")?;
        return Ok(());
    };
    console.line("Loan Details:")?;
    console.line(format_args!("Principal: {}", money(loan.principal())))?;
    match loan.interest_rate().checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => console.line(format_args!("Interest Rate: {}%", money(percent)))?,
        None => console.line(format_args!("Interest Rate: {} per year", loan.interest_rate()))?,
    }
    console.line(format_args!("Tenure: {} months", loan.tenure_months()))?;
    console.line(format_args!(
        "Outstanding Amount: {}",
        money(loan.outstanding_amount())
    ))?;
    Ok(())
}

// ========== Scheduled transfers ==========

fn schedule_transfer<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let from = console.prompt("Enter Source Account ID: ")?;
    let to = console.prompt("Enter Target Account ID: ")?;
    let amount: Decimal = console.prompt_parsed("Enter Amount to Transfer: ", "amount")?;
    let date: NaiveDate = console.prompt_parsed("Enter Transfer Date (YYYY-MM-DD): ", "date")?;

    bank.schedule_transfer(&from, &to, amount, date)?;
    console.line("Transfer scheduled successfully.")?;
    Ok(())
}

fn execute_scheduled_transfers<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    console.line("Executing scheduled transfers for today...")?;
    for transfer in bank.execute_due_transfers() {
        console.line(format_args!("Executed transfer: {transfer}"))?;
    }
    console.line("Done.")?;
    Ok(())
}

// ========== Accounts ==========

fn open_account<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let id = console.prompt("Enter Account ID: ")?;
    let account_type: AccountType =
        console.prompt_parsed("Enter Account Type (savings/current): ", "account type")?;
    let currency = prompt_currency(console, "Enter Currency (e.g., USD): ")?;
    let pin = console.prompt("Enter PIN: ")?;
    let opening: Decimal = console.prompt_parsed("Enter Opening Balance: ", "opening balance")?;

    let account = bank.open_account(id, account_type, &currency, pin, opening)?;
    let line = format!(
        "Account {} opened with balance {} {}.",
        account.id(),
        money(account.balance()),
        account.currency()
    );
    console.line(line)?;
    Ok(())
}

/// Prompts for account id, PIN and amount, in that order.
fn prompt_credentials<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    amount_label: &str,
) -> Result<(String, String, Decimal), SessionError> {
    let id = console.prompt("Enter Account ID: ")?;
    let pin = console.prompt("Enter PIN: ")?;
    let amount = console.prompt_parsed(amount_label, "amount")?;
    Ok((id, pin, amount))
}

fn balance_of(bank: &Bank, id: &str) -> Result<Decimal, SessionError> {
    bank.account(id)
        .map(teller_core::account::Account::balance)
        .ok_or_else(|| BankError::AccountNotFound(AccountId::new(id)).into())
}

fn deposit<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let (id, pin, amount) = prompt_credentials(console, "Enter Deposit Amount: ")?;

    if bank.deposit(&id, amount, &pin)? {
        let balance = balance_of(bank, &id)?;
        console.line(format_args!("Deposit successful. Balance: {}", money(balance)))?;
    } else {
        console.line("Deposit rejected.")?;
    }
    Ok(())
}

fn withdraw<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let (id, pin, amount) = prompt_credentials(console, "Enter Withdrawal Amount: ")?;

    if bank.withdraw(&id, amount, &pin)? {
        let balance = balance_of(bank, &id)?;
        console.line(format_args!("Withdrawal successful. Balance: {}", money(balance)))?;
    } else {
        console.line("Withdrawal rejected.")?;
    }
    Ok(())
}

fn transfer<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let from = console.prompt("Enter Source Account ID: ")?;
    let to = console.prompt("Enter Target Account ID: ")?;
    let pin = console.prompt("Enter PIN: ")?;
    let amount: Decimal = console.prompt_parsed("Enter Amount to Transfer: ", "amount")?;

    if bank.transfer(&from, &to, amount, &pin)? {
        console.line("Transfer successful.")?;
    } else {
        console.line("Transfer rejected.")?;
    }
    Ok(())
}

fn account_history<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let id = console.prompt("Enter Account ID: ")?;
    let account = bank
        .account(&id)
        .ok_or_else(|| BankError::AccountNotFound(AccountId::new(id.as_str())))?;

    let header = format!(
        "Balance: {} {}",
        money(account.balance()),
        account.currency()
    );
    let history = account.transaction_history();
    console.line(header)?;
    if history.is_empty() {
        console.line("No transactions yet.")?;
    }
    for entry in history {
        console.line(entry)?;
    }
    Ok(())
}

fn search_journal<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result<(), SessionError> {
    let keyword = console.prompt("Enter keyword: ")?;
    let matches = bank.journal().filter_by_keyword(&keyword);
    if matches.is_empty() {
        console.line("No matching entries.")?;
    }
    for entry in matches {
        console.line(entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::rc::Rc;

    use rstest::rstest;
    use rust_decimal_macros::dec;
    use teller_core::bank::BankSettings;
    use teller_core::clock::FixedClock;

    use super::*;

    fn bank() -> Bank {
        let clock = Rc::new(FixedClock::on(
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        ));
        Bank::with_clock(BankSettings::default(), clock)
    }

    /// Runs `script` as stdin and returns everything written to stdout.
    fn session(bank: &mut Bank, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run(bank, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[rstest]
    #[case("1", Some(MenuChoice::ConvertCurrency))]
    #[case(" 12 ", Some(MenuChoice::SearchJournal))]
    #[case("0", Some(MenuChoice::Exit))]
    #[case("13", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn test_menu_choice_parse(#[case] raw: &str, #[case] expected: Option<MenuChoice>) {
        assert_eq!(raw.parse::<MenuChoice>().ok(), expected);
    }

    #[test]
    fn test_exit_and_eof_end_session() {
        let mut bank = bank();
        let out = session(&mut bank, "0\n");
        assert!(out.contains("Welcome to the Banking System"));
        assert!(out.contains("12. Search Journal"));
        assert!(out.ends_with("Exiting the Banking System. Goodbye!\n"));

        let out = session(&mut bank, "");
        assert!(out.ends_with("Exiting the Banking System. Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice() {
        let mut bank = bank();
        let out = session(&mut bank, "42\n0\n");
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_convert_currency() {
        let mut bank = bank();
        let out = session(&mut bank, "1\nusd\nEUR\n100\n1\nUSD\nXYZ\n1\n");
        assert!(out.contains("Converted Amount: 90.00 EUR"));
        assert!(out.contains("Error: Unsupported currency: XYZ"));
    }

    #[test]
    fn test_out_of_range_amounts_report_and_continue() {
        let mut bank = bank();
        let script = "1\nUSD\nINR\n79228162514264337593543950335\n\
                      2\nA1\n1000000000000000000000\n1\n1000000000\n0\n";
        let out = session(&mut bank, script);
        assert!(out.contains(
            "Error: Converting 79228162514264337593543950335 from USD to INR overflows"
        ));
        assert!(out.contains("Error: Loan amount exceeds the supported range"));
        assert!(out.ends_with("Exiting the Banking System. Goodbye!\n"));
        assert!(bank.loan_details("A1").is_none());
    }

    #[test]
    fn test_loan_flow() {
        let mut bank = bank();
        let script = "2\nA1\n1000\n0.1\n12\n3\nA1\n500\n4\nA1\n3\nA1\n600\n4\nA1\n";
        let out = session(&mut bank, script);

        assert!(out.contains("Loan application successful."));
        assert!(out.contains("Outstanding Amount: 1100.00"));
        assert!(out.contains("Outstanding Amount: 600.00"));
        assert!(out.contains("Interest Rate: 10.00%"));
        assert!(out.contains("Loan fully repaid."));
        assert!(out.contains("No active loan for this account."));
    }

    #[test]
    fn test_bad_number_reports_and_continues() {
        let mut bank = bank();
        let out = session(&mut bank, "2\nA1\nlots\n0\n");
        assert!(out.contains("Error: Invalid loan amount: 'lots'"));
        assert!(out.ends_with("Exiting the Banking System. Goodbye!\n"));
        assert!(bank.loan_details("A1").is_none());
    }

    #[test]
    fn test_schedule_and_execute() {
        let mut bank = bank();
        let script = "5\nA\nB\n25\n2024-06-15\n5\nA\nB\n1\n2024-06-14\n6\n";
        let out = session(&mut bank, script);

        assert!(out.contains("Transfer scheduled successfully."));
        assert!(out.contains(
            "Error: Cannot schedule transfers in the past: 2024-06-14 is before 2024-06-15"
        ));
        assert!(out.contains("Executed transfer: Transfer from A to B of 25 on 2024-06-15"));
        assert!(out.contains("Done."));
        assert!(bank.scheduled_transfers().is_empty());
    }

    #[test]
    fn test_account_session() {
        let mut bank = bank();
        let script = concat!(
            "7\nA1\nsavings\nusd\n1234\n1000\n",
            "7\nA2\ncurrent\nUSD\n1234\n0\n",
            "8\nA1\n1234\n50\n",
            "9\nA1\nwrong\n10\n",
            "10\nA1\nA2\n1234\n200\n",
            "11\nA1\n",
            "12\nopened\n",
        );
        let out = session(&mut bank, script);

        assert!(out.contains("Account A1 opened with balance 1000.00 USD."));
        assert!(out.contains("Deposit successful. Balance: 1050.00"));
        assert!(out.contains("Withdrawal rejected."));
        assert!(out.contains("Transfer successful."));
        assert!(out.contains("Balance: 850.00 USD"));
        assert!(out.contains("Transferred: 200 to A2"));
        assert!(out.contains("Opened current account A2 with 0 USD"));
        assert_eq!(bank.account("A2").unwrap().balance(), dec!(200));
    }

    #[test]
    fn test_account_errors() {
        let mut bank = bank();
        let script = concat!(
            "7\nS1\nsavings\nUSD\n1\n100\n",
            "7\nS1\nchecking\n",
            "8\nNOPE\n1\n5\n",
            "11\nNOPE\n",
        );
        let out = session(&mut bank, script);

        assert!(out.contains("Error: Opening balance 100 is below the minimum balance 500"));
        assert!(out.contains("Error: Invalid account type: 'checking'"));
        assert!(out.contains("Error: Account not found: NOPE"));
        assert_eq!(bank.account_count(), 0);
    }
}
