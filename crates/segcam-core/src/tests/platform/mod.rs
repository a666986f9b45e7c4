mod permission;
mod storage;
