/*!
 This module contains types of errors that can happen when decoding pbzx data.
*/

pub mod pbzx;
