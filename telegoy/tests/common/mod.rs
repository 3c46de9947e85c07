pub mod mock_probe;
pub mod mock_sender;
