use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use invest_assist::config::AssistConfig;
use invest_assist::engine::{CurrentPrompt, DelayPolicy, NoDelay, ThinkingDelay};
use invest_assist::profile::{ProfileFlow, ProfileTurn, closing_message};
use invest_assist::risk::{RiskFlow, RiskTurn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let flow_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "profile".to_string());

    let defaults = AssistConfig::default();
    let delay_min_ms: u64 = std::env::var("INVEST_ASSIST_DELAY_MIN_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.thinking_delay_min.as_millis() as u64);
    let delay_max_ms: u64 = std::env::var("INVEST_ASSIST_DELAY_MAX_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.thinking_delay_max.as_millis() as u64);

    let config = AssistConfig {
        thinking_delay_min: Duration::from_millis(delay_min_ms),
        thinking_delay_max: Duration::from_millis(delay_max_ms),
    };
    let delay: Arc<dyn DelayPolicy> = if delay_min_ms == 0 && delay_max_ms == 0 {
        Arc::new(NoDelay)
    } else {
        Arc::new(ThinkingDelay::from_config(&config))
    };

    eprintln!("🤖 Invest Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Flow: {}", flow_name);
    eprintln!("   Answer with the option number or its text.");
    eprintln!("   /restart starts over, /quit exits.\n");

    let lines = BufReader::new(tokio::io::stdin()).lines();
    match flow_name.as_str() {
        "profile" => run_profile(ProfileFlow::new(delay), lines).await,
        "risk" => run_risk(RiskFlow::new(delay), lines).await,
        other => anyhow::bail!("unknown flow {other:?} (expected \"profile\" or \"risk\")"),
    }
}

async fn run_profile(flow: ProfileFlow, mut lines: Lines<BufReader<Stdin>>) -> Result<()> {
    let total = flow.status().await.total_steps;
    print_prompt(&flow.current_prompt().await?, total);

    while let Some(line) = lines.next_line().await? {
        let input = line.trim().to_string();
        if input.is_empty() {
            eprint!("> ");
            continue;
        }
        match input.as_str() {
            "/quit" => break,
            "/restart" => {
                flow.reset().await;
                print_prompt(&flow.current_prompt().await?, total);
                continue;
            }
            _ => {}
        }

        let value = resolve_value(&flow.current_prompt().await?, &input);
        eprintln!("⏳ AI is thinking...");
        match flow.submit(&value).await {
            Ok(ProfileTurn::Next(prompt)) => print_prompt(&prompt, total),
            Ok(ProfileTurn::Finished(profile)) => {
                println!("\n{}\n", closing_message(&profile));
                println!("Your Profile:");
                println!("  Name            {}", profile.name);
                println!("  Age Range       {}+", profile.age);
                println!("  Income          {}", profile.income);
                println!("  Goals           {}", profile.goals.join(", "));
                println!("  Risk Tolerance  {}", profile.risk_tolerance);
                println!("  Time Horizon    {}", profile.time_horizon);
                println!("  Experience      {}", profile.experience);
                println!("  Strategy        {}", profile.strategy);
                break;
            }
            Err(e) => {
                eprintln!("⚠️  {e}");
                eprint!("> ");
            }
        }
    }
    Ok(())
}

async fn run_risk(flow: RiskFlow, mut lines: Lines<BufReader<Stdin>>) -> Result<()> {
    let total = flow.status().await.total_steps;
    eprintln!("   /back revisits the previous question.\n");
    print_prompt(&flow.current_prompt().await?, total);

    while let Some(line) = lines.next_line().await? {
        let input = line.trim().to_string();
        if input.is_empty() {
            eprint!("> ");
            continue;
        }
        match input.as_str() {
            "/quit" => break,
            "/restart" => {
                flow.reset().await;
                print_prompt(&flow.current_prompt().await?, total);
                continue;
            }
            "/back" => {
                match flow.previous().await {
                    Ok(prompt) => print_prompt(&prompt, total),
                    Err(e) => {
                        eprintln!("⚠️  {e}");
                        eprint!("> ");
                    }
                }
                continue;
            }
            _ => {}
        }

        let value = resolve_value(&flow.current_prompt().await?, &input);
        eprintln!("⏳ Scoring...");
        match flow.submit(&value).await {
            Ok(RiskTurn::Next(prompt)) => print_prompt(&prompt, total),
            Ok(RiskTurn::Finished(result)) => {
                println!("\n✅ Risk Assessment Complete");
                println!(
                    "Your Risk Profile: {} — score {} out of {}",
                    result.tier.title(),
                    result.score,
                    result.max_score
                );
                println!("\n{}\n", result.description);
                println!("Recommended Investments:");
                for rec in &result.recommendations {
                    println!("  • {rec}");
                }
                println!("\nSuggested Allocation:");
                println!("  Stocks        {:>3}%", result.allocation.stocks);
                println!("  Bonds         {:>3}%", result.allocation.bonds);
                println!("  Alternatives  {:>3}%", result.allocation.alternatives);
                break;
            }
            Err(e) => {
                eprintln!("⚠️  {e}");
                eprint!("> ");
            }
        }
    }
    Ok(())
}

fn print_prompt(prompt: &CurrentPrompt, total: usize) {
    println!("\n[Step {} of {}] {}", prompt.step, total, prompt.text);
    for (i, option) in prompt.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.label);
    }
    eprint!("> ");
}

/// Map a numeric menu pick onto the option identifier; anything else is
/// passed through as-is.
fn resolve_value(prompt: &CurrentPrompt, input: &str) -> String {
    if !prompt.options.is_empty() {
        if let Ok(n) = input.parse::<usize>() {
            if (1..=prompt.options.len()).contains(&n) {
                return prompt.options[n - 1].value.clone();
            }
        }
    }
    input.to_string()
}
