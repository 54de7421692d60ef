use std::io::Read;

use argh::FromArgs;
use first_fit_pool::{Error, Pool};
use tracing_subscriber::EnvFilter;

/// The walkthrough below needs room for its first two blocks, 100 and 200 bytes.
const MIN_CAPACITY: usize = 300;

/// Walks through allocating, releasing and inspecting blocks of a first-fit pool.
#[derive(FromArgs)]
struct Args {
  /// pool size in bytes, at least 300
  #[argh(option, default = "1024", from_str_fn(parse_capacity))]
  capacity: usize,

  /// log every allocation and release
  #[argh(switch)]
  verbose: bool,

  /// pause for ENTER between phases
  #[argh(switch)]
  step: bool,
}

fn parse_capacity(value: &str) -> Result<usize, String> {
  let capacity: usize = value
    .parse()
    .map_err(|error| format!("invalid capacity '{value}': {error}"))?;

  if capacity < MIN_CAPACITY {
    return Err(format!(
      "capacity must be at least {MIN_CAPACITY} bytes, got {capacity}"
    ));
  }

  Ok(capacity)
}

/// Waits until the user presses ENTER, if stepping was requested.
fn pause(step: bool) {
  if !step {
    return;
  }

  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

fn show(pool: &Pool) {
  println!("{}", pool.listing());
  println!("{}", pool.stats());
}

fn main() -> Result<(), Error> {
  let args: Args = argh::from_env();

  let default_level = if args.verbose { "trace" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    )
    .init();

  let mut pool = Pool::new(args.capacity)?;
  println!("[0] Created a pool of {} bytes", pool.capacity());
  pause(args.step);

  // --------------------------------------------------------------------
  // 1) Two allocations land back to back from offset 0.
  // --------------------------------------------------------------------
  let first = pool.allocate(100)?;
  let second = pool.allocate(200)?;
  println!(
    "\n[1] Allocated 100 bytes at {} and 200 bytes at {}",
    first.offset(),
    second.offset()
  );
  show(&pool);
  pause(args.step);

  // --------------------------------------------------------------------
  // 2) Release the first block; its bytes stay as they were.
  // --------------------------------------------------------------------
  if let Some(bytes) = pool.bytes_mut(first) {
    bytes.fill(0xAB);
  }
  pool.release(first);
  println!("\n[2] Released the block at {}", first.offset());
  show(&pool);
  pause(args.step);

  // --------------------------------------------------------------------
  // 3) A small request reuses the hole at the front.
  // --------------------------------------------------------------------
  let third = pool.allocate(50)?;
  println!(
    "\n[3] Allocated 50 bytes at {} (reused freed space: {})",
    third.offset(),
    if third.offset() == first.offset() {
      "yes"
    } else {
      "no"
    }
  );
  if let Some(bytes) = pool.bytes(third) {
    println!("[3] First byte still holds {:#04X}", bytes[0]);
  }
  show(&pool);
  pause(args.step);

  // --------------------------------------------------------------------
  // 4) A request bigger than any free run fails without changing anything.
  // --------------------------------------------------------------------
  match pool.allocate(1000) {
    Ok(handle) => println!("\n[4] Unexpectedly allocated 1000 bytes at {}", handle.offset()),
    Err(error) => println!("\n[4] Allocating 1000 bytes failed: {error}"),
  }
  pause(args.step);

  // --------------------------------------------------------------------
  // 5) Releasing twice is a silent no-op; the strict variant reports it.
  // --------------------------------------------------------------------
  pool.release(second);
  pool.release(second);
  if let Err(error) = pool.try_release(second) {
    println!("\n[5] Second strict release of {}: {error}", second.offset());
  }
  show(&pool);
  pause(args.step);

  // --------------------------------------------------------------------
  // 6) Tear down; remaining bookkeeping and the buffer go away together.
  // --------------------------------------------------------------------
  pool.teardown();
  println!("\n[6] Pool torn down");

  Ok(())
}
