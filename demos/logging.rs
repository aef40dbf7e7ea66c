//! Structured logging around a small bank account.
//!
//! ```text
//! RUST_LOG=debug cargo run --example logging
//! ```

use tola_aop::mark_site;
use tola_aop::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Account {
    owner: &'static str,
    balance: u64,
}

#[derive(Debug)]
struct Overdrawn {
    missing: u64,
}

impl Account {
    fn deposit(&mut self, amount: u64) -> u64 {
        mark_site!();
        self.balance += amount;
        self.balance
    }

    fn withdraw(&mut self, amount: u64) -> Result<u64, Overdrawn> {
        mark_site!();
        if amount > self.balance {
            return Err(Overdrawn { missing: amount - self.balance });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_target(true)
        .init();

    let mut account = Embedded::from_aspects(
        (Trace::new("audit"), Counter::new()),
        Account { owner: "ada", balance: 0 },
    );

    account.invoke_mut(Account::deposit, (50,));
    if let Err(err) = account.try_invoke_mut(Account::withdraw, (80,)) {
        tracing::info!(owner = account.owner, missing = err.missing, "withdrawal refused");
    }

    let counter = account.chain().get::<1>();
    tracing::info!(
        calls = counter.before_calls(),
        failed = counter.error_calls(),
        balance = account.balance,
        "done"
    );
}
