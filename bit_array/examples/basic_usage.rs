use bit_array::BitArray;

fn main() {
    println!("=== Bit Array Examples ===\n");

    // Example 1: Membership markers
    let _ = example_membership();

    // Example 2: Bulk fill and aggregate queries
    let _ = example_aggregates();

    // Example 3: Memory comparison
    let _ = example_memory_savings();
}

fn example_membership() -> Result<(), bit_array::BitArrayError> {
    println!("Example 1: Marking seen items out of 100");

    let mut seen = BitArray::new(100)?;

    seen.set(7);
    seen.set(42);
    seen.set(99);

    println!("  Item 7 seen:  {}", seen.get(7));
    println!("  Item 8 seen:  {}", seen.get(8));
    println!("  Total seen:   {}", seen.popcount());
    println!();

    Ok(())
}

fn example_aggregates() -> Result<(), bit_array::BitArrayError> {
    println!("Example 2: Tracking completion of 13 tasks");

    let mut done = BitArray::new(13)?;
    println!("  Nothing started: none() = {}", done.none());

    for task in 0..12 {
        done.set(task);
    }
    println!("  12 of 13 done:   all()  = {}", done.all());

    done.set(12);
    println!("  13 of 13 done:   all()  = {}", done.all());

    done.clear();
    println!("  After reset:     any()  = {}", done.any());
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), bit_array::BitArrayError> {
    println!("Example 3: Memory usage for 10000 flags");

    // Standard Vec<bool>: 10000 flags x 1 byte = 10000 bytes
    let standard: Vec<bool> = vec![false; 10000];

    // BitArray: 10000 flags packed eight to a byte = 1250 bytes
    let packed = BitArray::new(10000)?;

    println!("  Vec<bool>: {} bytes", standard.len());
    println!("  BitArray:  {} bytes", packed.as_bytes().len());
    println!("  87.5% memory savings!");

    Ok(())
}
