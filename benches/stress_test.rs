use basketminer::apriori::{mine_frequent_itemsets, Corpus, MiningConfig};
use basketminer::mine;
use ndarray::Array2;
use rand::Rng;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn generate_matrix(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data)
        .expect("shape matches generated data")
}

fn dense_corpus(num_tx: usize, num_items: usize, avg_size: usize, density: f64) -> Corpus {
    let matrix = generate_matrix(num_tx, num_items, avg_size, density);
    let labels: Vec<String> = (0..num_items).map(|i| format!("item-{:03}", i)).collect();
    Corpus::from_dense(matrix.view(), &labels).expect("one label per column")
}

fn stress_test_scaling() {
    println!("\n=== Scaling Test ===");

    let configs = vec![
        ("1K x 30", 1_000, 30, 8),
        ("10K x 50", 10_000, 50, 10),
        ("50K x 80", 50_000, 80, 12),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);
        let start_gen = Instant::now();
        let corpus = dense_corpus(num_tx, num_items, avg_size, 0.7);
        println!("  Generated in {:?}", start_gen.elapsed());

        let config = MiningConfig::new(0.05, 0.5).expect("valid thresholds");
        match mine(&corpus, &config) {
            Ok(result) => {
                println!("  Completed in {:?}", result.processing_time);
                println!("  Itemsets: {}", result.frequent_itemsets.len());
                println!("  Rules: {}", result.rules.len());
            }
            Err(e) => println!("  Failed: {}", e),
        }
    }
}

fn stress_test_low_support() {
    println!("\n=== Low Support Test ===");

    let corpus = dense_corpus(5_000, 40, 10, 0.6);

    for &min_support in &[0.2, 0.1, 0.05, 0.02] {
        println!("\nTesting min_support = {}", min_support);
        let config = MiningConfig::new(min_support, 0.5).expect("valid thresholds");
        let start = Instant::now();
        let levels = mine_frequent_itemsets(&corpus, &config);
        let total_patterns: usize = levels.iter().map(|l| l.len()).sum();

        println!("  Time: {:?}", start.elapsed());
        println!("  Patterns: {}", total_patterns);
        println!("  Max itemset size: {}", levels.len());
        if total_patterns > 100_000 {
            println!("  Candidate explosion detected");
        }
    }
}

fn stress_test_dense_data() {
    println!("\n=== Dense Data Test (worst case) ===");

    let configs = vec![("Dense 80%", 2_000, 20, 15, 0.8), ("Dense 90%", 2_000, 20, 18, 0.9)];

    for (name, num_tx, num_items, avg_size, density) in configs {
        println!("\nTesting: {}", name);
        let corpus = dense_corpus(num_tx, num_items, avg_size, density);
        let config = MiningConfig::new(0.3, 0.8).expect("valid thresholds");

        match mine(&corpus, &config) {
            Ok(result) => {
                println!("  Time: {:?}", result.processing_time);
                println!("  Itemsets: {}", result.frequent_itemsets.len());
                println!("  Rules: {}", result.rules.len());
            }
            Err(e) => println!("  Failed: {}", e),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Apriori Stress Testing Suite ===");

    stress_test_scaling();
    stress_test_low_support();
    stress_test_dense_data();

    println!("\n=== Stress Testing Complete ===");
}
