#![no_std]

//! An owning singly linked list with head, tail and positional insertion,
//! value based removal and search, and forward iteration.

extern crate alloc;

pub mod linked_list;
