pub mod rewards_testkit;
