//! use_provider and value injection, with diagnostics visible

use partyline::{create_context, set_diagnostics};

struct SessionProps {
    user: &'static str,
}

#[derive(Clone, Debug)]
struct Session {
    user: String,
    admin: bool,
}

fn use_session(props: &SessionProps) -> Session {
    Session {
        user: props.user.to_string(),
        admin: props.user == "root",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();
    set_diagnostics(true);

    let (session, use_current) = create_context("session", use_session);

    println!("=== Inject Example ===\n");

    println!("1. A read with no provider warns and yields None");
    println!("   session: {:?}\n", use_current.get());

    println!("2. use_provider computes the value once");
    let (inject, value) = session.use_provider(&SessionProps { user: "ada" });
    println!("   value returned directly: {:?}\n", value);

    println!("3. The same value can wrap any number of subtrees");
    inject.wrap(|| {
        println!("   first subtree sees: {:?}", use_current.get());
    });
    inject.wrap(|| {
        println!("   second subtree sees: {:?}", use_current.get());
    });

    println!("\n4. provide_value overrides inside an existing scope");
    session.provide(&SessionProps { user: "ada" }, || {
        println!("   outer: {:?}", use_current.get());
        session.provide_value(
            Session {
                user: "root".to_string(),
                admin: true,
            },
            || {
                println!("   inner: {:?}", use_current.get());
            },
        );
    });
}
