use anyhow::Result;

use crate::services::GymService;

/// Loads demo data into an empty directory at startup, so a fresh process
/// has trainers, classes and routines to browse right away.
pub struct DemoSeeder {
    gym: GymService,
}

impl DemoSeeder {
    pub fn new(gym: GymService) -> Self {
        Self { gym }
    }

    pub fn seed_all(&self) -> Result<()> {
        if !self.gym.list_trainers().is_empty() {
            tracing::info!("Directory already has data, skipping seeding");
            return Ok(());
        }

        tracing::info!("Empty directory, creating seed data...");

        self.seed_trainers_and_classes()?;
        self.seed_routines()?;
        self.seed_demo_member()?;

        tracing::info!("Seed data loaded");
        Ok(())
    }

    fn seed_trainers_and_classes(&self) -> Result<()> {
        let yago = self
            .gym
            .register_trainer("Yago Fontenla", "yago@gym.com", "CrossFit")?;
        let ana = self
            .gym
            .register_trainer("Ana Lopez", "ana@gym.com", "Yoga")?;

        self.gym.create_class("Morning Yoga", "08:00", 15, ana.id)?;
        self.gym.create_class("Hard CrossFit", "18:00", 10, yago.id)?;
        self.gym.create_class("Core Pilates", "19:30", 12, ana.id)?;
        Ok(())
    }

    fn seed_routines(&self) -> Result<()> {
        let strength = self.gym.create_routine("Basic Strength", 45, "beginner")?;
        self.gym.add_exercise(strength.id, "Squat", 10, 3)?;
        self.gym.add_exercise(strength.id, "Bench Press", 8, 3)?;

        self.gym.create_routine("HIIT Cardio", 30, "advanced")?;
        Ok(())
    }

    /// A demo member with a paired wristband, handy for poking the API
    fn seed_demo_member(&self) -> Result<()> {
        let demo = self.gym.register_member(
            "Demo Member",
            "demo@gym.com",
            "1990-01-01",
            "intermediate",
            "demo1234",
        )?;
        self.gym.register_device("wristband", demo.id)?;
        Ok(())
    }
}
