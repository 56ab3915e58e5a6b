pub mod update_proposal;
