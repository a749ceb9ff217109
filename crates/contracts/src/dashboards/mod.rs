pub mod d401_missing_data;
