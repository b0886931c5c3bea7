//! Two entities patrol concurrently, each driven by one linear script.
//!
//! Run with `RUST_LOG=debug cargo run --example patrol` to see the
//! scheduler's own logging alongside the movement output.

use std::cell::RefCell;
use std::rc::Rc;

use action::{Action, ActionResult, Completion, Script};
use scheduler::Scheduler;

const DT: f64 = 1.0 / 60.0;

#[derive(Debug)]
struct Entity {
    name: &'static str,
    x: f64,
    y: f64,
}

type Shared = Rc<RefCell<Entity>>;

/// Moves an entity toward a target point at a fixed speed.
struct MoveTo {
    entity: Shared,
    target: (f64, f64),
    speed: f64,
}

impl Action for MoveTo {
    fn on_update(&mut self, dt: f64, completion: &mut Completion) -> ActionResult {
        let mut entity = self.entity.borrow_mut();
        let (dx, dy) = (self.target.0 - entity.x, self.target.1 - entity.y);
        let distance = (dx * dx + dy * dy).sqrt();
        let reach = self.speed * dt;

        if distance <= reach {
            entity.x = self.target.0;
            entity.y = self.target.1;
            completion.complete();
        } else {
            entity.x += dx / distance * reach;
            entity.y += dy / distance * reach;
        }
        Ok(())
    }

    fn on_exit(&mut self) -> ActionResult {
        let entity = self.entity.borrow();
        tracing::info!(
            "{} arrived at ({:.1}, {:.1})",
            entity.name,
            entity.x,
            entity.y
        );
        Ok(())
    }
}

/// Idles for a fixed amount of accumulated step time.
struct Pause {
    remaining: f64,
}

impl Action for Pause {
    fn on_update(&mut self, dt: f64, completion: &mut Completion) -> ActionResult {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            completion.complete();
        }
        Ok(())
    }
}

fn patrol(entity: &Shared, waypoints: &[(f64, f64)], speed: f64) -> Script {
    let mut builder = Script::builder();
    for &target in waypoints {
        builder = builder
            .action(MoveTo {
                entity: entity.clone(),
                target,
                speed,
            })
            .action(Pause { remaining: 0.5 });
    }
    builder.build()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let guard: Shared = Rc::new(RefCell::new(Entity {
        name: "guard",
        x: 0.0,
        y: 0.0,
    }));
    let scout: Shared = Rc::new(RefCell::new(Entity {
        name: "scout",
        x: 10.0,
        y: 10.0,
    }));

    let mut scheduler = Scheduler::new();
    scheduler
        .submit(patrol(&guard, &[(5.0, 0.0), (5.0, 5.0), (0.0, 0.0)], 4.0))
        .expect("guard patrol should start");
    scheduler
        .submit(patrol(&scout, &[(0.0, 10.0), (10.0, 0.0)], 6.0))
        .expect("scout patrol should start");

    let mut ticks = 0u32;
    while !scheduler.is_empty() {
        let report = scheduler.update(DT);
        assert!(report.is_clean());
        ticks += 1;
    }

    tracing::info!("both patrols finished after {ticks} ticks");
}
