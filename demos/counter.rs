//! Counter state shared through a context family

use partyline::ContextBuilder;

struct CounterProps {
    initial: i32,
}

#[derive(Clone, Debug)]
struct CounterState {
    count: i32,
    step: i32,
}

fn use_counter(props: &CounterProps) -> CounterState {
    CounterState {
        count: props.initial,
        step: 1,
    }
}

fn main() {
    println!("=== Counter Context ===\n");

    println!("1. Setting up the context family");
    let mut builder = ContextBuilder::new("counter", use_counter);
    let use_count = builder.select("count", |state: &CounterState| state.count);
    let use_step = builder.select("step", |state: &CounterState| state.step);
    let counter = builder.finish();

    println!("\n2. Reading before any provider is mounted");
    println!("   count: {:?}", use_count.get());

    println!("\n3. Providing with initial = 5");
    counter.provide(&CounterProps { initial: 5 }, || {
        println!("   count: {:?}", use_count.get());
        println!("   step:  {:?}", use_step.get());

        println!("\n4. Overriding in a nested scope");
        counter.provide(&CounterProps { initial: 100 }, || {
            println!("   inner count: {:?}", use_count.get());
        });

        println!("   outer count again: {:?}", use_count.get());
    });

    println!("\n5. Back outside every provider");
    println!("   count: {:?}", use_count.get());
}
