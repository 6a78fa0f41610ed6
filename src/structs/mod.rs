// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Data Model** - *Scalars, datums and typed views over `minarrow` columns*

pub mod datum;
pub mod scalar;
pub mod types;
pub mod view;
