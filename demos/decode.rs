/*!
 Decodes a raw `pbzx` stream from stdin to stdout.

 Extract the `Contents` entry of a `.xip` archive with a xar reader first; the
 decoded output is xz data ready for `xz -d`.

 ```sh
 cargo run --example decode < Contents.pbzx > Contents.xz
 ```
*/

use std::{io, process::exit};

fn main() {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    match pbzx::stream::copy(&mut stdout, &mut stdin) {
        Ok(written) => eprintln!("Decoded {written} bytes"),
        Err(why) => {
            eprintln!("Decode failed: {why}");
            exit(1);
        }
    }
}
