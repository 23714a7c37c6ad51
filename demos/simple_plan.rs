//! 簡單補貨排程示例

use replenish::{calculate_orders, list_algorithms, scenarios_from_source, PlanningConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 簡單補貨排程示例 ===\n");

    println!("可用政策:");
    for info in list_algorithms() {
        println!("  - {}: {}", info.name, info.description);
    }

    let config = PlanningConfig::default();
    let scenarios = scenarios_from_source("StaticRandom", &config);

    println!("\n場景清單:");
    for scenario in &scenarios {
        println!(
            "  - 物料: {}, 目標庫存: {}, 提前期: {}, 期初庫存: {}",
            scenario.mpn, scenario.inv_tgt, scenario.ld_tm, scenario.inv[0]
        );
    }

    let schedules = calculate_orders(&scenarios, "SmartReplenish")?;

    println!("\n排程結果 (SmartReplenish):");
    for schedule in &schedules {
        println!("  - 物料: {}", schedule.mpn);
        println!("    訂單: {:?}", schedule.ord);
        println!("    投影收貨: {:?}", schedule.rec);
        println!("    投影庫存: {:?}", schedule.inv);
        if !schedule.notes.is_empty() {
            println!("    警告: {}", schedule.notes);
        }
    }

    Ok(())
}
