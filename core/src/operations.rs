use crate::constants::{
    BIG_FONT_ADDRESS, BIG_FONT_HEIGHT, LONG_LOAD, SMALL_FONT_ADDRESS, SMALL_FONT_HEIGHT, VF,
};
use crate::error::Fault;
use crate::frame_buffer::{selected_planes, DisplayMode, Edges, Sprite};
use crate::opcode::Opcode;
use crate::state::State;
use crate::target::Target;

// Every operation runs after the pc has been advanced past its own opcode.

/// SUPER-CHIP and XO-CHIP only
fn require_extended(state: &State) -> Result<(), Fault> {
    match state.target {
        Target::Chip8 => Err(Fault::Unsupported(state.target)),
        _ => Ok(()),
    }
}

/// XO-CHIP only
fn require_xo(state: &State) -> Result<(), Fault> {
    match state.target {
        Target::XoChip => Ok(()),
        _ => Err(Fault::Unsupported(state.target)),
    }
}

/// Skips the next instruction when `condition` holds.
/// With the long skip quirk a following `F000 NNNN` is skipped as a whole.
fn skip_if(condition: bool, state: &mut State) {
    if !condition {
        return;
    }
    let next = state.memory.read_word(usize::from(state.pc));
    let width = if state.quirks.skip_long_load && next == Ok(LONG_LOAD) {
        4
    } else {
        2
    };
    state.pc = state.pc.wrapping_add(width);
}

/// Physical pixels a scroll of `amount` logical pixels moves
fn scroll_distance(state: &State, amount: u8) -> usize {
    usize::from(amount) * state.frame_buffer.mode().scale()
}

/// Registers Vx..Vy inclusive, counting down when x > y
fn register_range(x: usize, y: usize) -> Vec<usize> {
    if x <= y {
        (x..=y).collect()
    } else {
        (y..=x).rev().collect()
    }
}

/// Placeholder for any opcode with no operation behind it
pub fn null(_op: &dyn Opcode, _state: &mut State) -> Result<(), Fault> {
    Err(Fault::Unimplemented)
}

/// scroll down n
pub fn scrd(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    let distance = scroll_distance(state, op.n());
    state.frame_buffer.scroll_down(distance);
    Ok(())
}

/// scroll up n
pub fn scru(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_xo(state)?;
    let distance = scroll_distance(state, op.n());
    state.frame_buffer.scroll_up(distance);
    Ok(())
}

/// clear the selected planes
pub fn clr(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.frame_buffer.clear();
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.pc = state.stack.pop()?;
    Ok(())
}

/// scroll right 4
pub fn scrr(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    let distance = scroll_distance(state, 4);
    state.frame_buffer.scroll_right(distance);
    Ok(())
}

/// scroll left 4
pub fn scrl(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    let distance = scroll_distance(state, 4);
    state.frame_buffer.scroll_left(distance);
    Ok(())
}

/// Ask the host to stop running the interpreter
pub fn exit(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    log::debug!("exit requested at {:04X}", state.instruction_address());
    state.exited = true;
    Ok(())
}

/// 64x32; clears both planes
pub fn lores(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    log::debug!("switching to low resolution");
    state.frame_buffer.set_mode(DisplayMode::LowRes);
    Ok(())
}

/// 128x64; clears both planes
pub fn hires(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    log::debug!("switching to high resolution");
    state.frame_buffer.set_mode(DisplayMode::HighRes);
    Ok(())
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.pc = op.nnn();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.stack.push(state.pc)?;
    state.pc = op.nnn();
    Ok(())
}

/// if Vx == nn then skip
pub fn ske(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    skip_if(state.v[op.x()] == op.nn(), state);
    Ok(())
}

/// if Vx != nn then skip
pub fn skne(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    skip_if(state.v[op.x()] != op.nn(), state);
    Ok(())
}

/// if Vx == Vy then skip
pub fn skre(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    skip_if(state.v[op.x()] == state.v[op.y()], state);
    Ok(())
}

/// mem[I..] = Vx..Vy
pub fn savesub(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_xo(state)?;
    let base = usize::from(state.i);
    for (offset, register) in register_range(op.x(), op.y()).into_iter().enumerate() {
        state.memory.write_byte(base + offset, state.v[register])?;
    }
    Ok(())
}

/// Vx..Vy = mem[I..]
pub fn loadsub(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_xo(state)?;
    let base = usize::from(state.i);
    for (offset, register) in register_range(op.x(), op.y()).into_iter().enumerate() {
        state.v[register] = state.memory.read_byte(base + offset)?;
    }
    Ok(())
}

/// Vx = nn
pub fn load(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = op.nn();
    Ok(())
}

/// Vx += nn
/// Overflow is dropped and VF is untouched
pub fn add(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.nn());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = state.v[op.y()];
    Ok(())
}

fn logic(op: &dyn Opcode, state: &mut State, f: fn(u8, u8) -> u8) -> Result<(), Fault> {
    state.v[op.x()] = f(state.v[op.x()], state.v[op.y()]);
    if state.quirks.logic_resets_vf {
        state.v[VF] = 0;
    }
    Ok(())
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    logic(op, state, |x, y| x | y)
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    logic(op, state, |x, y| x & y)
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    logic(op, state, |x, y| x ^ y)
}

// The arithmetic operations store the result before the flag, so when x is F
// the flag is what remains in VF.

/// Vx += Vy; VF = carry
pub fn addr(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let (result, carry) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = result;
    state.v[VF] = u8::from(carry);
    Ok(())
}

/// Vx -= Vy; VF = !borrow
pub fn sub(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let (result, borrow) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    state.v[op.x()] = result;
    state.v[VF] = u8::from(!borrow);
    Ok(())
}

/// Operand of the shift operations, which depends on the target
fn shift_source(op: &dyn Opcode, state: &State) -> u8 {
    if state.quirks.shift_reads_vy {
        state.v[op.y()]
    } else {
        state.v[op.x()]
    }
}

/// Vx = Vy >> 1; VF = lsb
pub fn shr(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let source = shift_source(op, state);
    state.v[op.x()] = source >> 1;
    state.v[VF] = source & 0x1;
    Ok(())
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let (result, borrow) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    state.v[op.x()] = result;
    state.v[VF] = u8::from(!borrow);
    Ok(())
}

/// Vx = Vy << 1; VF = msb
pub fn shl(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let source = shift_source(op, state);
    state.v[op.x()] = source << 1;
    state.v[VF] = source >> 7;
    Ok(())
}

/// if Vx != Vy then skip
pub fn skrne(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    skip_if(state.v[op.x()] != state.v[op.y()], state);
    Ok(())
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.i = op.nnn();
    Ok(())
}

/// PC = V0 + addr, or Vx + addr where x is the top nibble of addr
pub fn jumpi(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let offset = if state.quirks.jump_uses_vx {
        state.v[op.x()]
    } else {
        state.v[0x0]
    };
    state.pc = op.nnn().wrapping_add(u16::from(offset));
    Ok(())
}

/// Vx = rand_byte & nn
pub fn rand(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = state.random_byte() & op.nn();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory at I onto each selected plane at x, y.
/// When both planes are selected the second plane's sprite follows the first in memory.
/// n = 0 draws a 16x16 sprite on SUPER-CHIP and XO-CHIP and nothing on CHIP-8.
/// VF = 1 if any set pixel is cleared
pub fn draw(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let x = usize::from(state.v[op.x()]);
    let y = usize::from(state.v[op.y()]);
    let (width, height) = match (op.n(), state.target) {
        (0, Target::SuperChip) | (0, Target::XoChip) => (16, 16),
        (n, _) => (8, usize::from(n)),
    };
    let edges = if state.quirks.wrap_sprites {
        Edges::Wrap
    } else {
        Edges::Clip
    };
    let size = Sprite::size(width, height);
    let bitplane = state.frame_buffer.bitplane();

    // every selected plane's sprite must be in memory before any plane is touched
    let total = size * selected_planes(bitplane).count();
    let data = state.memory.slice(usize::from(state.i), total)?;
    let mut collided = false;
    for (index, plane) in selected_planes(bitplane).enumerate() {
        let rows = &data[index * size..(index + 1) * size];
        let sprite = Sprite::new(rows, width, height);
        collided |= state.frame_buffer.draw(plane, x, y, &sprite, edges);
    }

    state.v[VF] = u8::from(collided);
    Ok(())
}

/// if Vx.pressed then skip
pub fn skpr(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let key = usize::from(state.v[op.x()] & 0xF);
    skip_if(state.keys[key], state);
    Ok(())
}

/// if !Vx.pressed then skip
pub fn skup(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let key = usize::from(state.v[op.x()] & 0xF);
    skip_if(!state.keys[key], state);
    Ok(())
}

/// I = mem[PC..PC+2]; the address occupies the following word
pub fn loadl(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_xo(state)?;
    state.i = state.memory.read_word(usize::from(state.pc))?;
    state.pc = state.pc.wrapping_add(2);
    Ok(())
}

/// bitplane = x
pub fn plane(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_xo(state)?;
    // 0 selects no plane at all
    let mask = op.x() as u8;
    if mask > 0x3 {
        return Err(Fault::InvalidBitplane(mask));
    }
    log::debug!("selecting bitplane mask {}", mask);
    state.frame_buffer.select_bitplane(mask);
    Ok(())
}

/// Load the audio pattern buffer from mem[I..I+16]
pub fn audio(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_xo(state)?;
    Err(Fault::Unimplemented)
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = state.timers.delay;
    Ok(())
}

/// await a key press and release, then Vx = key
///
/// Re-executes itself by rewinding the pc until the key latched on the way down is seen
/// back up.
pub fn keyd(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    if let Some(key) = state.pressed_key {
        if !state.keys[usize::from(key)] {
            state.v[op.x()] = key;
            state.pressed_key = None;
            return Ok(());
        }
    }

    if state.pressed_key.is_none() {
        if let Some(key) = state.keys.iter().position(|&pressed| pressed) {
            state.pressed_key = Some(key as u8);
        }
    }
    state.pc = state.instruction_address();
    Ok(())
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.timers.delay = state.v[op.x()];
    Ok(())
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.timers.sound = state.v[op.x()];
    Ok(())
}

/// I += Vx
pub fn addi(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    Ok(())
}

/// I = address of the 5-row glyph for Vx
pub fn ldspr(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    state.i = SMALL_FONT_ADDRESS + SMALL_FONT_HEIGHT * u16::from(state.v[op.x()]);
    Ok(())
}

/// I = address of the 10-row glyph for Vx
pub fn ldbig(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    state.i = BIG_FONT_ADDRESS + BIG_FONT_HEIGHT * u16::from(state.v[op.x()]);
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let value = state.v[op.x()];
    let digits = [value / 100, value / 10 % 10, value % 10];
    state
        .memory
        .slice_mut(usize::from(state.i), 3)?
        .copy_from_slice(&digits);
    Ok(())
}

/// Set the audio playback pitch from Vx
pub fn pitch(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_xo(state)?;
    Err(Fault::Unimplemented)
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let count = op.x() + 1;
    state
        .memory
        .slice_mut(usize::from(state.i), count)?
        .copy_from_slice(&state.v[..count]);
    if state.quirks.load_store_increments_i {
        state.i = state.i.wrapping_add(count as u16);
    }
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    let count = op.x() + 1;
    let bytes = state.memory.slice(usize::from(state.i), count)?;
    state.v[..count].copy_from_slice(bytes);
    if state.quirks.load_store_increments_i {
        state.i = state.i.wrapping_add(count as u16);
    }
    Ok(())
}

/// Save V0..=Vx to the persistent flag registers
pub fn srpl(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    Err(Fault::Unimplemented)
}

/// Restore V0..=Vx from the persistent flag registers
pub fn lrpl(_op: &dyn Opcode, state: &mut State) -> Result<(), Fault> {
    require_extended(state)?;
    Err(Fault::Unimplemented)
}
